//! Card art and issuer logo references.
//!
//! Both are pure functions of the product record (plus the logo-service token
//! shipped in the data file), so they can be checked without a network.

use serde::{Deserialize, Serialize};
use url::Url;

use cardcompare_core::{CatalogError, CatalogResult};

use crate::product::Product;

/// Built-in card art used when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "assets/card-art/placeholder.svg";

/// Primary image for a product: official art, then generic art, then the placeholder.
pub fn resolve_image<'a>(product: &'a Product, placeholder: &'a str) -> &'a str {
    product
        .official_image()
        .or_else(|| product.generic_image())
        .unwrap_or(placeholder)
}

/// Logo domains for a product, deduplicated in first-seen order.
///
/// An explicit `logoDomains` list wins (even when empty); otherwise the single
/// `issuerDomain` is used. Empty entries are dropped.
pub fn logo_domains(product: &Product) -> Vec<&str> {
    let candidates: Vec<&str> = match &product.logo_domains {
        Some(domains) => domains.iter().map(String::as_str).collect(),
        None => product.issuer_domain.as_deref().into_iter().collect(),
    };

    let mut seen = Vec::with_capacity(candidates.len());
    for domain in candidates {
        if !domain.is_empty() && !seen.contains(&domain) {
            seen.push(domain);
        }
    }
    seen
}

/// A resolved issuer logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub domain: String,
    pub url: String,
}

/// External logo lookup service (`img.logo.dev` style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoService {
    pub base_url: String,
    pub format: String,
    pub size: u32,
    pub fallback: String,
}

impl Default for LogoService {
    fn default() -> Self {
        Self {
            base_url: "https://img.logo.dev".to_string(),
            format: "png".to_string(),
            size: 64,
            fallback: "monogram".to_string(),
        }
    }
}

impl LogoService {
    /// Check the base address can carry a domain path segment.
    pub fn validate(&self) -> CatalogResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| CatalogError::validation(format!("logo base_url: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(CatalogError::validation(format!(
                "logo base_url is not a base address: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// `{base}/{domain}?format=..&size=..&fallback=..[&token=..]`.
    ///
    /// Returns `None` for an empty domain or an unusable base address. A blank
    /// token is omitted.
    pub fn logo_url(&self, domain: &str, token: Option<&str>) -> Option<String> {
        if domain.is_empty() {
            return None;
        }
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(domain);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("format", &self.format)
                .append_pair("size", &self.size.to_string())
                .append_pair("fallback", &self.fallback);
            if let Some(token) = token.filter(|t| !t.is_empty()) {
                query.append_pair("token", token);
            }
        }
        Some(url.into())
    }

    pub fn logos(&self, product: &Product, token: Option<&str>) -> Vec<Logo> {
        logo_domains(product)
            .into_iter()
            .filter_map(|domain| {
                self.logo_url(domain, token).map(|url| Logo {
                    domain: domain.to_string(),
                    url,
                })
            })
            .collect()
    }
}
