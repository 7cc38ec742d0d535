//! Storefront Core
//!
//! Platform-agnostic state for the single-page storefront: catalog, cart,
//! wishlist, slide navigation, checkout and the order-tracking stub.
//! This crate has no UI or browser dependencies.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod money;
pub mod navigation;
pub mod quantity;
pub mod session;
pub mod tracking;
pub mod wishlist;

// Re-export commonly used types
pub use cart::{Cart, CartError, CartItem, CartSummary};
pub use catalog::{Catalog, CatalogError, Product};
pub use checkout::{CheckoutError, OrderId, OrderReceipt, checkout, is_order_id_valid};
pub use config::{IndicatorConfig, StoreConfig};
pub use money::format_price;
pub use navigation::{IndicatorBox, LayoutBox, Slide, SlideNavigator, indicator_geometry};
pub use quantity::{MIN_QUANTITY, parse_quantity};
pub use session::{Badges, StoreSession};
pub use tracking::{TrackingError, TrackingState};
pub use wishlist::{HeartState, Wishlist, WishlistError, WishlistItem, WishlistToggle};

/// Trait for abstracting catalog loading.
/// Platform-specific implementations should provide this.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the product catalog from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the store tunables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config(&self) -> Result<StoreConfig, Self::Error>;
}
