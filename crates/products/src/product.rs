use serde::{Deserialize, Serialize};

use cardcompare_core::{Entity, ProductId};

use crate::field::FieldValue;

/// A card offer as published in the catalog data file.
///
/// Only `id` is mandatory. Everything else is tolerated when missing so one
/// sloppy record never takes the whole catalog down; renderers substitute a
/// neutral placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(rename = "cardCategory", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reward_type: Option<String>,
    #[serde(default)]
    pub joining_fee: Option<FieldValue>,
    #[serde(default)]
    pub annual_fee: Option<FieldValue>,
    /// Minimum fixed deposit backing a secured card.
    #[serde(rename = "minFd", default)]
    pub min_deposit: Option<FieldValue>,
    #[serde(default)]
    pub limit_policy: Option<FieldValue>,
    #[serde(default)]
    pub rewards: Option<FieldValue>,
    #[serde(default)]
    pub forex_markup: Option<FieldValue>,
    #[serde(default)]
    pub lounge_access: Option<FieldValue>,
    #[serde(default)]
    pub eligibility: Option<FieldValue>,
    #[serde(default)]
    pub notes: Option<FieldValue>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub official_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub logo_domains: Option<Vec<String>>,
    #[serde(default)]
    pub issuer_domain: Option<String>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Product {
    /// Minimal record, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            issuer: issuer.into(),
            category: None,
            reward_type: None,
            joining_fee: None,
            annual_fee: None,
            min_deposit: None,
            limit_policy: None,
            rewards: None,
            forex_markup: None,
            lounge_access: None,
            eligibility: None,
            notes: None,
            apply_url: None,
            official_image: None,
            image: None,
            image_alt: None,
            partner: None,
            logo_domains: None,
            issuer_domain: None,
        }
    }

    /// Outbound application link; an empty string counts as absent.
    pub fn apply_url(&self) -> Option<&str> {
        non_empty(&self.apply_url)
    }

    pub fn partner(&self) -> Option<&str> {
        non_empty(&self.partner)
    }

    pub fn official_image(&self) -> Option<&str> {
        non_empty(&self.official_image)
    }

    pub fn generic_image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Alt text for the card art, derived from the name when not provided.
    pub fn image_alt(&self) -> String {
        match non_empty(&self.image_alt) {
            Some(alt) => alt.to_string(),
            None => format!("{} card visual", self.name),
        }
    }

    /// Category line shown under the card title (`"Secured • Partner"`).
    pub fn category_line(&self) -> String {
        let category = self.category.as_deref().unwrap_or_default();
        match self.partner() {
            Some(partner) => format!("{category} • {partner}"),
            None => category.to_string(),
        }
    }

    /// Lowercased text the free-text query is matched against.
    pub fn search_text(&self) -> String {
        let rewards = self.rewards.as_ref().map(|r| r.to_string()).unwrap_or_default();
        let partner = self.partner().unwrap_or_default();
        format!("{} {} {} {}", self.name, self.issuer, rewards, partner)
            .trim()
            .to_lowercase()
    }

    /// Value of a comparable attribute, or `None` when the record omits it.
    pub fn attribute(&self, attribute: ProductAttribute) -> Option<FieldValue> {
        let text = |s: &str| Some(FieldValue::text(s));
        match attribute {
            ProductAttribute::Issuer => text(&self.issuer),
            ProductAttribute::Category => self.category.as_deref().and_then(text),
            ProductAttribute::RewardType => self.reward_type.as_deref().and_then(text),
            ProductAttribute::JoiningFee => self.joining_fee.clone(),
            ProductAttribute::AnnualFee => self.annual_fee.clone(),
            ProductAttribute::MinDeposit => self.min_deposit.clone(),
            ProductAttribute::LimitPolicy => self.limit_policy.clone(),
            ProductAttribute::Rewards => self.rewards.clone(),
            ProductAttribute::ForexMarkup => self.forex_markup.clone(),
            ProductAttribute::LoungeAccess => self.lounge_access.clone(),
            ProductAttribute::Eligibility => self.eligibility.clone(),
            ProductAttribute::ApplyLink => self.apply_url().and_then(text),
            ProductAttribute::Notes => self.notes.clone(),
        }
    }
}

/// How an attribute is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Numbers go through the currency formatter; text passes through.
    Currency,
    Text,
    /// Rendered as an apply action or a "coming soon" placeholder.
    Link,
}

/// The attributes shown side by side in the comparison table, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAttribute {
    Issuer,
    Category,
    RewardType,
    JoiningFee,
    AnnualFee,
    MinDeposit,
    LimitPolicy,
    Rewards,
    ForexMarkup,
    LoungeAccess,
    Eligibility,
    ApplyLink,
    Notes,
}

impl ProductAttribute {
    pub const ALL: [ProductAttribute; 13] = [
        ProductAttribute::Issuer,
        ProductAttribute::Category,
        ProductAttribute::RewardType,
        ProductAttribute::JoiningFee,
        ProductAttribute::AnnualFee,
        ProductAttribute::MinDeposit,
        ProductAttribute::LimitPolicy,
        ProductAttribute::Rewards,
        ProductAttribute::ForexMarkup,
        ProductAttribute::LoungeAccess,
        ProductAttribute::Eligibility,
        ProductAttribute::ApplyLink,
        ProductAttribute::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductAttribute::Issuer => "Issuer",
            ProductAttribute::Category => "Category",
            ProductAttribute::RewardType => "Type",
            ProductAttribute::JoiningFee => "Joining fee",
            ProductAttribute::AnnualFee => "Annual fee",
            ProductAttribute::MinDeposit => "Minimum FD",
            ProductAttribute::LimitPolicy => "Credit limit policy",
            ProductAttribute::Rewards => "Rewards",
            ProductAttribute::ForexMarkup => "Forex markup",
            ProductAttribute::LoungeAccess => "Lounge access",
            ProductAttribute::Eligibility => "Eligibility",
            ProductAttribute::ApplyLink => "Apply",
            ProductAttribute::Notes => "Notes",
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            ProductAttribute::JoiningFee
            | ProductAttribute::AnnualFee
            | ProductAttribute::MinDeposit => AttributeKind::Currency,
            ProductAttribute::ApplyLink => AttributeKind::Link,
            _ => AttributeKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "sbi-unnati",
        "issuer": "SBI Card",
        "name": "Unnati",
        "cardCategory": "Secured",
        "rewardType": "Reward points",
        "joiningFee": 0,
        "annualFee": "Free for 4 years",
        "minFd": 25000,
        "rewards": "1 point per 100 spent",
        "partner": "",
        "applyUrl": "   "
    }"#;

    #[test]
    fn deserializes_wire_names() {
        let product: Product = serde_json::from_str(RECORD).unwrap();
        assert_eq!(product.id.as_str(), "sbi-unnati");
        assert_eq!(product.category.as_deref(), Some("Secured"));
        assert_eq!(product.min_deposit, Some(FieldValue::Number(25000.0)));
        assert_eq!(product.annual_fee, Some(FieldValue::text("Free for 4 years")));
        assert!(product.lounge_access.is_none());
    }

    #[test]
    fn blank_partner_is_absent() {
        let product: Product = serde_json::from_str(RECORD).unwrap();
        assert_eq!(product.partner(), None);
        assert_eq!(product.category_line(), "Secured");
    }

    #[test]
    fn search_text_joins_name_issuer_rewards_partner() {
        let mut product: Product = serde_json::from_str(RECORD).unwrap();
        product.partner = Some("Flipkart".to_string());
        assert_eq!(
            product.search_text(),
            "unnati sbi card 1 point per 100 spent flipkart"
        );
        assert_eq!(product.category_line(), "Secured • Flipkart");
    }

    #[test]
    fn image_alt_falls_back_to_name() {
        let mut product = Product::new("a", "Ace", "Axis");
        assert_eq!(product.image_alt(), "Ace card visual");
        product.image_alt = Some("Front of the Ace card".to_string());
        assert_eq!(product.image_alt(), "Front of the Ace card");
    }

    #[test]
    fn attribute_rows_are_fixed_and_ordered() {
        assert_eq!(ProductAttribute::ALL.len(), 13);
        assert_eq!(ProductAttribute::ALL[0].label(), "Issuer");
        assert_eq!(ProductAttribute::ALL[11].kind(), AttributeKind::Link);
        assert_eq!(ProductAttribute::ALL[12].label(), "Notes");
        assert_eq!(ProductAttribute::AnnualFee.kind(), AttributeKind::Currency);
    }

    #[test]
    fn apply_link_attribute_treats_only_empty_as_absent() {
        let product: Product = serde_json::from_str(RECORD).unwrap();
        // "   " is non-empty, so it still counts as a link; only "" is absent.
        assert!(product.attribute(ProductAttribute::ApplyLink).is_some());

        let mut product = product;
        product.apply_url = Some(String::new());
        assert!(product.attribute(ProductAttribute::ApplyLink).is_none());
    }
}
