//! Display-ready view models.
//!
//! Everything here is plain data: currency is already formatted, fallbacks are
//! resolved and placeholders substituted. Components only lay it out.

use serde::{Deserialize, Serialize};

use cardcompare_browse::{AppState, Lifecycle, SelectionSet, attribute_cell};
use cardcompare_core::ProductId;
use cardcompare_products::media::resolve_image;
use cardcompare_products::{CurrencyFormat, Logo, LogoService, PLACEHOLDER_IMAGE, Product, ProductAttribute};

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub currency: CurrencyFormat,
    pub logo: LogoService,
    pub placeholder_image: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            logo: LogoService::default(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Attributes listed in the detail overlay body, in order.
const DETAIL_ATTRIBUTES: [ProductAttribute; 9] = [
    ProductAttribute::JoiningFee,
    ProductAttribute::AnnualFee,
    ProductAttribute::MinDeposit,
    ProductAttribute::LimitPolicy,
    ProductAttribute::Rewards,
    ProductAttribute::ForexMarkup,
    ProductAttribute::LoungeAccess,
    ProductAttribute::Eligibility,
    ProductAttribute::Notes,
];

pub fn results_count_text(count: usize) -> String {
    format!("{count} card(s)")
}

pub fn last_updated_text(value: &str) -> String {
    format!("Last updated: {value}")
}

/// Card art with the placeholder to swap in if it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageModel {
    pub src: String,
    pub fallback: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyAction {
    Link(String),
    /// No link yet; rendered as a disabled placeholder.
    Pending,
}

impl ApplyAction {
    fn for_product(product: &Product) -> Self {
        match product.apply_url() {
            Some(url) => ApplyAction::Link(url.to_string()),
            None => ApplyAction::Pending,
        }
    }
}

/// Everything a catalog card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: ProductId,
    pub name: String,
    pub issuer: String,
    pub category_line: String,
    pub image: ImageModel,
    pub logos: Vec<Logo>,
    pub annual_fee: String,
    pub min_deposit: String,
    pub reward_type: String,
    pub apply: ApplyAction,
    pub selected: bool,
    /// Compare checkbox is locked: not selected and the selection is full.
    pub disabled: bool,
}

/// What the card list area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListModel {
    #[default]
    Loading,
    Failed(String),
    Empty,
    Cards(Vec<CardModel>),
}

impl ListModel {
    pub fn cards(&self) -> &[CardModel] {
        match self {
            ListModel::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, id: &ProductId) -> Option<&CardModel> {
        self.cards().iter().find(|c| &c.id == id)
    }

    /// Status line shown instead of cards.
    pub fn message(&self) -> Option<String> {
        match self {
            ListModel::Loading => Some("Loading cards…".to_string()),
            ListModel::Failed(reason) => Some(format!("Could not load data. {reason}")),
            ListModel::Empty => Some("No cards match the selected filters.".to_string()),
            ListModel::Cards(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Full attribute view for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub id: ProductId,
    pub name: String,
    pub issuer: String,
    pub category_line: String,
    pub image: ImageModel,
    pub logos: Vec<Logo>,
    pub rows: Vec<DetailRow>,
    pub apply: ApplyAction,
}

/// Builds view models from application state.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    config: ViewConfig,
}

impl Presenter {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn list(&self, state: &AppState) -> ListModel {
        match state.lifecycle() {
            Lifecycle::Loading => ListModel::Loading,
            Lifecycle::Failed(reason) => ListModel::Failed(reason.clone()),
            Lifecycle::Ready(catalog) => {
                let visible = state.visible_products();
                if visible.is_empty() {
                    return ListModel::Empty;
                }
                ListModel::Cards(
                    visible
                        .into_iter()
                        .map(|p| self.card(p, state.selection(), catalog.logo_token()))
                        .collect(),
                )
            }
        }
    }

    pub fn card(&self, product: &Product, selection: &SelectionSet, logo_token: Option<&str>) -> CardModel {
        CardModel {
            id: product.id.clone(),
            name: product.name.clone(),
            issuer: product.issuer.clone(),
            category_line: product.category_line(),
            image: self.image(product),
            logos: self.config.logo.logos(product, logo_token),
            annual_fee: self.cell(product, ProductAttribute::AnnualFee),
            min_deposit: self.cell(product, ProductAttribute::MinDeposit),
            reward_type: self.cell(product, ProductAttribute::RewardType),
            apply: ApplyAction::for_product(product),
            selected: selection.contains(&product.id),
            disabled: !selection.can_toggle(&product.id),
        }
    }

    pub fn detail(&self, product: &Product, logo_token: Option<&str>) -> DetailModel {
        DetailModel {
            id: product.id.clone(),
            name: product.name.clone(),
            issuer: product.issuer.clone(),
            category_line: product.category_line(),
            image: self.image(product),
            logos: self.config.logo.logos(product, logo_token),
            rows: DETAIL_ATTRIBUTES
                .into_iter()
                .map(|attribute| DetailRow {
                    label: attribute.label(),
                    value: self.cell(product, attribute),
                })
                .collect(),
            apply: ApplyAction::for_product(product),
        }
    }

    fn image(&self, product: &Product) -> ImageModel {
        let placeholder = self.config.placeholder_image.as_str();
        ImageModel {
            src: resolve_image(product, placeholder).to_string(),
            fallback: placeholder.to_string(),
            alt: product.image_alt(),
        }
    }

    fn cell(&self, product: &Product, attribute: ProductAttribute) -> String {
        attribute_cell(product, attribute, &self.config.currency).text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcompare_browse::FilterField;
    use cardcompare_products::{Catalog, FieldValue};

    fn product() -> Product {
        let mut p = Product::new("axis-ace", "Ace", "Axis Bank");
        p.category = Some("Cashback".to_string());
        p.reward_type = Some("Cashback".to_string());
        p.annual_fee = Some(FieldValue::Number(499.0));
        p.min_deposit = Some(FieldValue::text("Not required"));
        p.issuer_domain = Some("axisbank.com".to_string());
        p
    }

    #[test]
    fn card_formats_money_and_passes_text_through() {
        let card = Presenter::default().card(&product(), &SelectionSet::new(), None);
        assert_eq!(card.annual_fee, "₹499");
        assert_eq!(card.min_deposit, "Not required");
        assert_eq!(card.reward_type, "Cashback");
        assert_eq!(card.apply, ApplyAction::Pending);
    }

    #[test]
    fn image_falls_back_to_placeholder() {
        let card = Presenter::default().card(&product(), &SelectionSet::new(), None);
        assert_eq!(card.image.src, "assets/card-art/placeholder.svg");
        assert_eq!(card.image.fallback, "assets/card-art/placeholder.svg");

        let mut p = product();
        p.official_image = Some("art/ace.png".to_string());
        let card = Presenter::default().card(&p, &SelectionSet::new(), None);
        assert_eq!(card.image.src, "art/ace.png");
    }

    #[test]
    fn logos_carry_token() {
        let card = Presenter::default().card(&product(), &SelectionSet::new(), Some("pk_1"));
        assert_eq!(card.logos.len(), 1);
        assert_eq!(
            card.logos[0].url,
            "https://img.logo.dev/axisbank.com?format=png&size=64&fallback=monogram&token=pk_1"
        );
    }

    #[test]
    fn checkbox_locked_only_for_unselected_at_capacity() {
        let presenter = Presenter::default();
        let mut selection = SelectionSet::new();
        for id in ["x", "y", "axis-ace"] {
            selection.toggle(&ProductId::new(id));
        }
        let card = presenter.card(&product(), &selection, None);
        assert!(card.selected && !card.disabled);

        selection.toggle(&ProductId::new("axis-ace"));
        selection.toggle(&ProductId::new("z"));
        let card = presenter.card(&product(), &selection, None);
        assert!(!card.selected && card.disabled);
    }

    #[test]
    fn list_reflects_lifecycle_and_filters() {
        let presenter = Presenter::default();
        let mut state = AppState::new();
        assert_eq!(presenter.list(&state).message().as_deref(), Some("Loading cards…"));

        state.finish_loading(Ok::<_, String>(Catalog::from_products(vec![product()]).unwrap()));
        assert_eq!(presenter.list(&state).cards().len(), 1);

        state.set_filter(FilterField::Query, "nothing");
        assert_eq!(
            presenter.list(&state).message().as_deref(),
            Some("No cards match the selected filters.")
        );

        let failed = ListModel::Failed("HTTP 404".to_string());
        assert_eq!(failed.message().as_deref(), Some("Could not load data. HTTP 404"));
    }

    #[test]
    fn detail_lists_attributes_with_placeholders() {
        let detail = Presenter::default().detail(&product(), None);
        assert_eq!(detail.rows.len(), 9);
        assert_eq!(detail.rows[1], DetailRow { label: "Annual fee", value: "₹499".to_string() });
        assert_eq!(detail.rows[8], DetailRow { label: "Notes", value: "-".to_string() });
    }

    #[test]
    fn status_texts() {
        assert_eq!(results_count_text(2), "2 card(s)");
        assert_eq!(last_updated_text("Jan 2025"), "Last updated: Jan 2025");
    }
}
