//! Catalog error model.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Data problems found while building a catalog or checking settings.
///
/// Network and filesystem failures are reported by the loaders, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A setting or field value is unusable.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product identifier is blank.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two products share one identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(CatalogError::duplicate_id("hdfc-infinia").to_string(), "duplicate product id: hdfc-infinia");
        assert_eq!(CatalogError::validation("logo size").to_string(), "validation failed: logo size");
    }
}
