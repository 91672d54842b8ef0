//! Browse state for the card catalog.
//!
//! Filtering, comparison selection, the detail overlay and the load lifecycle,
//! implemented as deterministic state over an immutable [`Catalog`]. Nothing in
//! here renders or performs IO.
//!
//! [`Catalog`]: cardcompare_products::Catalog

pub mod comparison;
pub mod detail;
pub mod filter;
pub mod selection;
pub mod state;

pub use comparison::{Cell, Column, ComparisonRow, ComparisonTable, attribute_cell, build_comparison};
pub use detail::{DetailState, DetailView};
pub use filter::{FilterCriteria, FilterField, FilterInputs, filter_options, filter_products};
pub use selection::{MAX_COMPARE, SelectionSet, Toggle};
pub use state::{AppState, Lifecycle};
