//! Filter evaluation.
//!
//! Raw control values live in [`FilterInputs`]; [`FilterInputs::criteria`]
//! turns them into [`FilterCriteria`], which is what products are matched
//! against.

use serde::{Deserialize, Serialize};

use cardcompare_core::ValueObject;
use cardcompare_products::field::parse_number;
use cardcompare_products::{FieldValue, Product};

/// One of the five filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Query,
    MaxAnnualFee,
    MaxMinDeposit,
    Category,
    RewardType,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Query,
        FilterField::MaxAnnualFee,
        FilterField::MaxMinDeposit,
        FilterField::Category,
        FilterField::RewardType,
    ];

    /// DOM id of the control bound to this field.
    pub fn control_id(&self) -> &'static str {
        match self {
            FilterField::Query => "search",
            FilterField::MaxAnnualFee => "max-fee",
            FilterField::MaxMinDeposit => "max-fd",
            FilterField::Category => "card-category",
            FilterField::RewardType => "reward-type",
        }
    }
}

/// Raw text of the filter controls, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterInputs {
    pub query: String,
    pub max_annual_fee: String,
    pub max_min_deposit: String,
    pub category: String,
    pub reward_type: String,
}

impl FilterInputs {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.query,
            FilterField::MaxAnnualFee => &self.max_annual_fee,
            FilterField::MaxMinDeposit => &self.max_min_deposit,
            FilterField::Category => &self.category,
            FilterField::RewardType => &self.reward_type,
        }
    }

    /// Returns whether the stored value changed.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        let slot = match field {
            FilterField::Query => &mut self.query,
            FilterField::MaxAnnualFee => &mut self.max_annual_fee,
            FilterField::MaxMinDeposit => &mut self.max_min_deposit,
            FilterField::Category => &mut self.category,
            FilterField::RewardType => &mut self.reward_type,
        };
        let value = value.into();
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: normalized(&self.query),
            max_annual_fee: bound_from_input(&self.max_annual_fee),
            max_min_deposit: bound_from_input(&self.max_min_deposit),
            category: normalized(&self.category),
            reward_type: normalized(&self.reward_type),
        }
    }
}

/// Active constraints; `None` means the dimension is unconstrained.
///
/// Text fields are stored trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub max_annual_fee: Option<f64>,
    pub max_min_deposit: Option<f64>,
    pub category: Option<String>,
    pub reward_type: Option<String>,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            if !product.search_text().contains(query.as_str()) {
                return false;
            }
        }
        if exceeds(product.annual_fee.as_ref(), self.max_annual_fee) {
            return false;
        }
        if exceeds(product.min_deposit.as_ref(), self.max_min_deposit) {
            return false;
        }
        if !equals_normalized(product.category.as_deref(), self.category.as_deref()) {
            return false;
        }
        if !equals_normalized(product.reward_type.as_deref(), self.reward_type.as_deref()) {
            return false;
        }
        true
    }
}

/// Numeric bound from a raw control value.
///
/// The bound is active only when the raw text is non-empty AND reads as a
/// finite number. `"0"` is an active bound of zero; `""` is no bound.
pub fn bound_from_input(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    parse_number(raw)
}

fn normalized(text: &str) -> Option<String> {
    let text = text.trim().to_lowercase();
    (!text.is_empty()).then_some(text)
}

/// Values without a numeric reading are never excluded by a bound.
fn exceeds(value: Option<&FieldValue>, bound: Option<f64>) -> bool {
    match (value.and_then(FieldValue::as_number), bound) {
        (Some(value), Some(bound)) => value > bound,
        _ => false,
    }
}

fn equals_normalized(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.unwrap_or_default().trim().to_lowercase() == wanted,
    }
}

/// Products satisfying every active constraint, in input order.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// Choices for a selector control: distinct trimmed values in first-seen
/// order. Values differing only in case collapse to the first spelling, since
/// matching ignores case. Free-text and numeric fields have no choices.
pub fn filter_options(products: &[Product], field: FilterField) -> Vec<String> {
    let value = |p: &Product| match field {
        FilterField::Category => p.category.clone(),
        FilterField::RewardType => p.reward_type.clone(),
        _ => None,
    };

    let mut options: Vec<String> = Vec::new();
    for raw in products.iter().filter_map(value) {
        let trimmed = raw.trim();
        if trimmed.is_empty() || options.iter().any(|o| o.eq_ignore_ascii_case(trimmed)) {
            continue;
        }
        options.push(trimmed.to_string());
    }
    options
}
