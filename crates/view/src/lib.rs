//! `cardcompare-view`: Leptos views for the card browser and the render loop.
//!
//! The [`Presenter`] turns browse state into display-ready models and the
//! components in [`components`] lay them out; Leptos escapes every text and
//! attribute value. The [`Orchestrator`] owns the [`AppState`], applies UI
//! events to it and pushes fresh models to a [`Surface`].
//!
//! [`AppState`]: cardcompare_browse::AppState

pub mod components;
pub mod model;
pub mod orchestrator;
pub mod surface;

pub use components::{ApplyLink, Card, CardImage, CardList, ComparisonView, DetailBody, IssuerLogo};
pub use model::{
    ApplyAction, CardModel, DetailModel, DetailRow, ImageModel, ListModel, Presenter, ViewConfig,
    last_updated_text, results_count_text,
};
pub use orchestrator::{Orchestrator, UiEvent};
pub use surface::{MemorySurface, Surface};
