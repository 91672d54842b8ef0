//! Host configuration.
//!
//! Layers, lowest to highest priority: built-in defaults, an optional TOML
//! file, then `CARDCOMPARE_*` environment variables (`__` separates nested
//! keys, e.g. `CARDCOMPARE_CURRENCY__GROUPING=western`).

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use cardcompare_core::CatalogResult;
use cardcompare_products::{CurrencyFormat, LogoService, PLACEHOLDER_IMAGE};
use cardcompare_view::ViewConfig;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "cardcompare.toml";

pub const ENV_PREFIX: &str = "CARDCOMPARE_";

/// Catalog location used when nothing overrides it.
pub const DEFAULT_DATA_SOURCE: &str = "data/cards.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Filesystem path or `http(s)` URL of the catalog document.
    pub data_source: String,
    pub placeholder_image: String,
    pub logo: LogoService,
    pub currency: CurrencyFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            logo: LogoService::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from the given file (if it exists) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            } else {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().map_err(Box::new)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        self.logo.validate()
    }

    pub fn is_remote(&self) -> bool {
        self.data_source.starts_with("http://") || self.data_source.starts_with("https://")
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            currency: self.currency.clone(),
            logo: self.logo.clone(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}
