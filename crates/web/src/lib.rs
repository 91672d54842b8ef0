//! `cardcompare-web`
//!
//! **Responsibility:** hosts for the card browser.
//!
//! This crate provides:
//! - Layered configuration ([`config::AppConfig`])
//! - Catalog loading over HTTP or from disk ([`loader`])
//! - The browser frontend (wasm32 only)
//!
//! Filtering, selection and rendering live in `cardcompare-browse` and
//! `cardcompare-view`; this crate only wires them to IO.

pub mod config;
pub mod loader;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::AppConfig;
pub use loader::{DataSource, HttpSource, LoadError, load_catalog, resolve_data_url};

#[cfg(not(target_arch = "wasm32"))]
pub use loader::FileSource;
