//! Products catalog module.
//!
//! This crate contains the card-offer model and the pure helpers that turn its
//! fields into display values (currency, images, issuer logos). No IO.

pub mod catalog;
pub mod field;
pub mod media;
pub mod money;
pub mod product;

pub use catalog::{Catalog, CatalogDocument};
pub use field::FieldValue;
pub use media::{Logo, LogoService, PLACEHOLDER_IMAGE};
pub use money::{CurrencyFormat, Grouping};
pub use product::{AttributeKind, Product, ProductAttribute};
