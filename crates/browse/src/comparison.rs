//! Side-by-side comparison table.

use cardcompare_core::{Entity, ProductId, ValueObject};
use cardcompare_products::{AttributeKind, CurrencyFormat, Product, ProductAttribute};

use crate::selection::SelectionSet;

/// Text shown for an attribute the record does not carry.
pub const MISSING_VALUE: &str = "-";

/// One table cell, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Value(String),
    Missing,
    Apply { url: String },
    ApplyPending,
}

impl ValueObject for Cell {}

impl Cell {
    /// Plain-text rendering of the cell.
    pub fn text(&self) -> &str {
        match self {
            Cell::Value(value) => value,
            Cell::Missing => MISSING_VALUE,
            Cell::Apply { .. } => "Apply now",
            Cell::ApplyPending => "Coming soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub attribute: ProductAttribute,
    pub cells: Vec<Cell>,
}

impl ComparisonRow {
    pub fn label(&self) -> &'static str {
        self.attribute.label()
    }
}

/// Attribute rows × selected-product columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    pub columns: Vec<Column>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// No product selected; callers show an empty-state message instead.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build the comparison for the selected products.
///
/// Columns follow the master list order, not selection order. Selected ids
/// missing from `products` are skipped.
pub fn build_comparison(
    products: &[Product],
    selection: &SelectionSet,
    currency: &CurrencyFormat,
) -> ComparisonTable {
    let selected: Vec<&Product> = products
        .iter()
        .filter(|p| selection.contains(&p.id))
        .collect();

    if selected.is_empty() {
        return ComparisonTable::default();
    }

    let columns = selected
        .iter()
        .map(|p| Column {
            id: p.id().clone(),
            name: p.display_name().to_string(),
        })
        .collect();

    let rows = ProductAttribute::ALL
        .into_iter()
        .map(|attribute| ComparisonRow {
            attribute,
            cells: selected
                .iter()
                .map(|p| attribute_cell(p, attribute, currency))
                .collect(),
        })
        .collect();

    ComparisonTable { columns, rows }
}

/// Display cell for one attribute of one product.
pub fn attribute_cell(product: &Product, attribute: ProductAttribute, currency: &CurrencyFormat) -> Cell {
    match attribute.kind() {
        AttributeKind::Link => match product.apply_url() {
            Some(url) => Cell::Apply {
                url: url.to_string(),
            },
            None => Cell::ApplyPending,
        },
        AttributeKind::Currency => match product.attribute(attribute) {
            Some(value) => Cell::Value(currency.format_field(&value)),
            None => Cell::Missing,
        },
        AttributeKind::Text => match product.attribute(attribute) {
            Some(value) => Cell::Value(value.to_string()),
            None => Cell::Missing,
        },
    }
}
