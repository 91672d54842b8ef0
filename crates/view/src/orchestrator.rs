//! Render orchestration.
//!
//! Every UI event runs to completion: mutate [`AppState`], then push fresh
//! view models for the parts of the page that depend on what changed. There
//! is no diffing here; each part is replaced whole.

use cardcompare_browse::{AppState, FilterField};
use cardcompare_core::ProductId;
use cardcompare_products::Catalog;

use crate::model::Presenter;
use crate::surface::Surface;

/// User interactions the browser forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FilterChanged { field: FilterField, value: String },
    ClearFilters,
    ToggleSelection(ProductId),
    ClearSelection,
    /// Click on a card body.
    OpenDetail(ProductId),
    /// Key pressed while a card has focus; Enter and Space open it.
    CardKey { id: ProductId, key: String },
    CloseDetail,
}

pub struct Orchestrator<S: Surface> {
    state: AppState,
    presenter: Presenter,
    surface: S,
}

impl<S: Surface> Orchestrator<S> {
    /// Start in the loading state and draw the initial placeholders.
    pub fn new(presenter: Presenter, surface: S) -> Self {
        let mut orchestrator = Self {
            state: AppState::new(),
            presenter,
            surface,
        };
        orchestrator.render_all();
        orchestrator
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Settle the load and draw the resulting page.
    pub fn finish_loading<E: core::fmt::Display>(&mut self, outcome: Result<Catalog, E>) {
        if self.state.finish_loading(outcome) {
            self.render_all();
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        tracing::debug!(?event, "ui event");
        match event {
            UiEvent::FilterChanged { field, value } => {
                self.state.set_filter(field, value);
                self.render_list();
            }
            UiEvent::ClearFilters => {
                self.state.clear_filters();
                self.render_list();
            }
            UiEvent::ToggleSelection(id) => {
                let outcome = self.state.toggle_selection(&id);
                tracing::debug!(%id, ?outcome, "selection toggled");
                // A refused toggle still redraws so the host drops its own
                // checkbox state.
                self.render_list();
                self.render_comparison();
            }
            UiEvent::ClearSelection => {
                self.state.clear_selection();
                self.render_list();
                self.render_comparison();
            }
            UiEvent::OpenDetail(id) => self.open_detail(&id),
            UiEvent::CardKey { id, key } => {
                if key == "Enter" || key == " " {
                    self.open_detail(&id);
                }
            }
            UiEvent::CloseDetail => {
                self.state.close_detail();
                self.surface.show_detail(None);
            }
        }
    }

    fn open_detail(&mut self, id: &ProductId) {
        if self.state.open_detail(id) {
            self.render_detail();
        }
    }

    pub fn render_all(&mut self) {
        self.render_header();
        self.render_list();
        self.render_comparison();
        self.render_detail();
    }

    fn render_header(&mut self) {
        let last_updated = self.state.catalog().map(|c| c.last_updated().to_string());
        self.surface.show_header(last_updated);
    }

    fn render_list(&mut self) {
        let count = self
            .state
            .catalog()
            .map(|_| self.state.visible_products().len());
        self.surface.show_count(count);
        self.surface.show_list(self.presenter.list(&self.state));
    }

    fn render_comparison(&mut self) {
        let table = self.state.comparison(&self.presenter.config().currency);
        self.surface.show_comparison(table);
    }

    fn render_detail(&mut self) {
        let token = self.state.catalog().and_then(Catalog::logo_token);
        let detail = self
            .state
            .detail_product()
            .map(|product| self.presenter.detail(product, token));
        self.surface.show_detail(detail);
    }
}
