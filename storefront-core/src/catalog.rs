//! Product catalog shown as product cards.
use crate::cart::CartItem;
use crate::wishlist::WishlistItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../storefront-web/static/assets/data/catalog.json");

/// A product card's data: name, price and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key shared by cart lines and wishlist entries.
    pub name: String,
    pub price_paise: u64,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    #[must_use]
    pub fn cart_item(&self, quantity: u32) -> CartItem {
        CartItem::new(&self.name, self.price_paise, quantity, &self.image)
    }

    #[must_use]
    pub fn wishlist_item(&self) -> WishlistItem {
        WishlistItem::new(&self.name, self.price_paise, &self.image)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product name: {0}")]
    DuplicateProduct(String),
    #[error("catalog has no products")]
    Empty,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the catalog is empty, or two
    /// products share a name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_default()
    }

    /// Check that the catalog is non-empty and product names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.name.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::load_from_static();
        assert!(!catalog.is_empty());
        assert!(catalog.validate().is_ok());
        assert!(catalog.find("Classic Sneakers").is_some());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"{"products":[
            {"name":"A","price_paise":100,"image":"a.jpg"},
            {"name":"A","price_paise":200,"image":"b.jpg"}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(ref n) if n == "A"));
    }

    #[test]
    fn empty_and_malformed_catalogs_fail() {
        assert!(matches!(
            Catalog::from_json(r#"{"products":[]}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn product_converts_to_cart_and_wishlist_entries() {
        let product = Product {
            name: String::from("Mug"),
            price_paise: 25_000,
            image: String::from("static/img/mug.jpg"),
            description: String::new(),
        };
        let line = product.cart_item(0);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.price_paise, 25_000);
        let wish = product.wishlist_item();
        assert_eq!(wish.name, "Mug");
        assert_eq!(wish.image, "static/img/mug.jpg");
    }
}
