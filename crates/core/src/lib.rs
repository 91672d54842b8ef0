//! `cardcompare-core`
//!
//! Identifiers, the catalog error type and the two domain traits shared by
//! every other crate. No IO, no rendering.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use value_object::ValueObject;
