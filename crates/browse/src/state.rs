//! Application state and the load lifecycle.

use cardcompare_core::ProductId;
use cardcompare_products::{Catalog, CurrencyFormat, Product};

use crate::comparison::{ComparisonTable, build_comparison};
use crate::detail::DetailView;
use crate::filter::{FilterField, FilterInputs, filter_products};
use crate::selection::{SelectionSet, Toggle};

/// Catalog load lifecycle: `Loading → Ready | Failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Lifecycle {
    #[default]
    Loading,
    Ready(Catalog),
    /// Human-readable reason the load failed.
    Failed(String),
}

/// Everything the browser UI needs to re-derive its views.
///
/// Owned by whoever drives rendering and passed around explicitly.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    lifecycle: Lifecycle,
    inputs: FilterInputs,
    selection: SelectionSet,
    detail: DetailView,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready state over an already-loaded catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            lifecycle: Lifecycle::Ready(catalog),
            ..Self::default()
        }
    }

    /// Leave `Loading`. Later calls are ignored; returns whether the
    /// transition happened.
    pub fn finish_loading<E: core::fmt::Display>(&mut self, outcome: Result<Catalog, E>) -> bool {
        if !matches!(self.lifecycle, Lifecycle::Loading) {
            tracing::debug!("catalog load already settled; ignoring result");
            return false;
        }
        self.lifecycle = match outcome {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog ready");
                Lifecycle::Ready(catalog)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                Lifecycle::Failed(err.to_string())
            }
        };
        true
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.lifecycle {
            Lifecycle::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Returns whether the input changed.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        self.inputs.set(field, value)
    }

    pub fn clear_filters(&mut self) {
        self.inputs.clear();
    }

    pub fn toggle_selection(&mut self, id: &ProductId) -> Toggle {
        self.selection.toggle(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// No-op until the catalog is ready or when `id` is unknown.
    pub fn open_detail(&mut self, id: &ProductId) -> bool {
        match &self.lifecycle {
            Lifecycle::Ready(catalog) => self.detail.open(catalog, id),
            _ => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Product currently shown in the detail overlay.
    pub fn detail_product(&self) -> Option<&Product> {
        let id = self.detail.current()?;
        self.catalog()?.get(id)
    }

    /// Products passing the current filters, in master order.
    pub fn visible_products(&self) -> Vec<&Product> {
        match self.catalog() {
            Some(catalog) => filter_products(catalog.products(), &self.inputs.criteria()),
            None => Vec::new(),
        }
    }

    pub fn comparison(&self, currency: &CurrencyFormat) -> ComparisonTable {
        match self.catalog() {
            Some(catalog) => build_comparison(catalog.products(), &self.selection, currency),
            None => ComparisonTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcompare_core::CatalogError;

    fn catalog() -> Catalog {
        let mut premium = Product::new("p", "Premium", "X");
        premium.category = Some("Premium".to_string());
        Catalog::from_products(vec![premium, Product::new("e", "Entry", "Y")]).unwrap()
    }

    #[test]
    fn starts_loading_with_nothing_visible() {
        let state = AppState::new();
        assert_eq!(state.lifecycle(), &Lifecycle::Loading);
        assert!(state.visible_products().is_empty());
        assert!(state.comparison(&CurrencyFormat::default()).is_empty());
    }

    #[test]
    fn load_success_then_ready() {
        let mut state = AppState::new();
        assert!(state.finish_loading(Ok::<_, CatalogError>(catalog())));
        assert!(state.catalog().is_some());
        assert_eq!(state.visible_products().len(), 2);
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut state = AppState::new();
        assert!(state.finish_loading(Err::<Catalog, _>("HTTP 404")));
        assert_eq!(state.lifecycle(), &Lifecycle::Failed("HTTP 404".to_string()));

        assert!(!state.finish_loading(Ok::<_, CatalogError>(catalog())));
        assert!(state.catalog().is_none());
    }

    #[test]
    fn detail_requires_ready_catalog() {
        let mut state = AppState::new();
        assert!(!state.open_detail(&ProductId::new("p")));

        let mut state = AppState::with_catalog(catalog());
        assert!(state.open_detail(&ProductId::new("p")));
        assert_eq!(state.detail_product().unwrap().name, "Premium");
        state.close_detail();
        assert!(state.detail_product().is_none());
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut state = AppState::with_catalog(catalog());
        state.toggle_selection(&ProductId::new("e"));
        state.set_filter(FilterField::Category, "premium");

        let visible: Vec<&str> = state.visible_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, vec!["p"]);
        assert!(state.selection().contains(&ProductId::new("e")));
        assert_eq!(state.comparison(&CurrencyFormat::default()).columns.len(), 1);
    }
}
