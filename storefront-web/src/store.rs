//! Web-specific storefront data
//!
//! This module provides the browser implementation of the storefront-core
//! loader trait and re-exports the core state types.

pub use storefront_core::*;

const CATALOG_JSON: &str = include_str!("../static/assets/data/catalog.json");
const STORE_JSON: &str = include_str!("../static/assets/data/store.json");

/// Loads the catalog and store settings bundled with the page.
pub struct WebCatalogLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogLoader for WebCatalogLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(CATALOG_JSON)?)
    }

    fn load_config(&self) -> Result<StoreConfig, Self::Error> {
        Ok(StoreConfig::from_json(STORE_JSON)?)
    }
}

/// Load the bundled catalog, falling back to an empty one on failure.
#[must_use]
pub fn load_catalog() -> Catalog {
    WebCatalogLoader.load_catalog().unwrap_or_else(|err| {
        log::error!("failed to load catalog: {err}");
        Catalog::default()
    })
}

/// Load the bundled settings, falling back to defaults on failure.
#[must_use]
pub fn load_config() -> StoreConfig {
    WebCatalogLoader.load_config().unwrap_or_else(|err| {
        log::error!("failed to load store config: {err}");
        StoreConfig::default()
    })
}
