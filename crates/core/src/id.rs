//! Strongly-typed identifiers used across the catalog.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a catalog product.
///
/// Product ids come from the data file and are opaque strings (e.g.
/// `"hdfc-regalia-gold"`). They are unique across a loaded catalog and stable
/// for the session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids must carry at least one non-whitespace character.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.0.trim().is_empty() {
            return Err(CatalogError::invalid_id("ProductId: empty"));
        }
        Ok(())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self(s.to_string());
        id.validate()?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        assert!(matches!(
            "   ".parse::<ProductId>(),
            Err(CatalogError::InvalidId(_))
        ));
        assert_eq!("card-1".parse::<ProductId>().unwrap().as_str(), "card-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::new("axis-ace");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"axis-ace\"");
    }
}
