//! Single-product detail overlay.

use cardcompare_core::ProductId;
use cardcompare_products::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(ProductId),
}

/// Tracks which product, if any, the detail overlay shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    state: DetailState,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `id`, replacing whatever is open.
    ///
    /// Unknown ids leave the state untouched. Returns whether the overlay now
    /// shows `id`.
    pub fn open(&mut self, catalog: &Catalog, id: &ProductId) -> bool {
        if !catalog.contains(id) {
            tracing::debug!(product_id = %id, "detail requested for unknown product; ignored");
            return false;
        }
        self.state = DetailState::Open(id.clone());
        true
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn current(&self) -> Option<&ProductId> {
        match &self.state {
            DetailState::Open(id) => Some(id),
            DetailState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }
}
