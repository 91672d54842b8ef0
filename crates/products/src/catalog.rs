//! The loaded catalog: an immutable, validated product list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cardcompare_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::product::Product;

/// Wire shape of the catalog data file (`data/cards.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub cards: Vec<Product>,
    #[serde(default)]
    pub last_updated: String,
    /// Token for the logo service; only ever used to build logo URLs.
    #[serde(default)]
    pub logo_dev_token: Option<String>,
}

impl CatalogDocument {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Validated catalog. Created once per load and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    last_updated: String,
    logo_token: Option<String>,
}

impl Catalog {
    /// Validate a document: every id must be non-blank and unique.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(document.cards.len());
        for (position, product) in document.cards.iter().enumerate() {
            product.id().validate()?;
            if index.insert(product.id().clone(), position).is_some() {
                return Err(CatalogError::duplicate_id(product.id().as_str()));
            }
        }

        Ok(Self {
            products: document.cards,
            index,
            last_updated: document.last_updated,
            logo_token: document.logo_dev_token.filter(|t| !t.is_empty()),
        })
    }

    pub fn from_products(products: Vec<Product>) -> CatalogResult<Self> {
        Self::from_document(CatalogDocument {
            cards: products,
            ..CatalogDocument::default()
        })
    }

    /// Products in master-list order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn logo_token(&self) -> Option<&str> {
        self.logo_token.as_deref()
    }
}
