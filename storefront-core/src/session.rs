use crate::cart::{Cart, CartError, CartItem, CartSummary};
use crate::catalog::{Catalog, Product};
use crate::checkout::{CheckoutError, OrderReceipt, checkout};
use crate::config::StoreConfig;
use crate::navigation::{Slide, SlideNavigator};
use crate::quantity::parse_quantity;
use crate::wishlist::{HeartState, Wishlist, WishlistError, WishlistItem, WishlistToggle};
use serde::{Deserialize, Serialize};

/// Counter overlays on the cart and wishlist tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badges {
    pub cart_lines: usize,
    pub wishlist_entries: usize,
}

/// Page-session state: cart, wishlist and the visible slide.
///
/// Owned by the view layer for the lifetime of a page view; every mutation is
/// followed by a full re-render from this object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSession {
    cart: Cart,
    wishlist: Wishlist,
    navigator: SlideNavigator,
    config: StoreConfig,
}

impl StoreSession {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    #[must_use]
    pub fn badges(&self) -> Badges {
        Badges {
            cart_lines: self.cart.len(),
            wishlist_entries: self.wishlist.len(),
        }
    }

    #[must_use]
    pub const fn active_slide(&self) -> Slide {
        self.navigator.active()
    }

    /// Show the slide at `index`; unknown indices are ignored.
    pub fn select_slide(&mut self, index: u8) -> bool {
        let found = self.navigator.select_index(index);
        if !found {
            log::warn!("ignoring navigation to unknown slide {index}");
        }
        found
    }

    pub fn show(&mut self, slide: Slide) {
        self.navigator.select(slide);
    }

    /// Add to the cart, merging with an existing line of the same name.
    pub fn add_to_cart(&mut self, item: CartItem) -> u32 {
        let name = item.name.clone();
        let quantity = self.cart.add_item(item);
        log::debug!("cart: {name} now x{quantity}");
        quantity
    }

    /// Add a product card's item using the raw text of its quantity input.
    pub fn add_product(&mut self, product: &Product, raw_quantity: &str) -> u32 {
        self.add_to_cart(product.cart_item(parse_quantity(raw_quantity)))
    }

    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] if no line exists at `index`.
    pub fn update_quantity(&mut self, index: usize, raw: &str) -> Result<u32, CartError> {
        self.cart.update_quantity(index, raw)
    }

    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] if no line exists at `index`.
    pub fn remove_cart_line(&mut self, index: usize) -> Result<CartItem, CartError> {
        let removed = self.cart.remove_line(index)?;
        log::debug!("cart: removed {}", removed.name);
        Ok(removed)
    }

    /// Whether clearing would discard anything and so needs confirming.
    #[must_use]
    pub fn clear_needs_confirmation(&self) -> bool {
        !self.cart.is_empty()
    }

    /// Empty the cart once the user has confirmed. Returns whether anything
    /// was cleared.
    pub fn clear_cart(&mut self, confirmed: bool) -> bool {
        if !confirmed || self.cart.is_empty() {
            return false;
        }
        self.cart.clear();
        log::debug!("cart: cleared");
        true
    }

    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn checkout(&mut self, now_ms: u64) -> Result<OrderReceipt, CheckoutError> {
        let receipt = checkout(&mut self.cart, now_ms, &self.config)?;
        log::debug!(
            "checkout: {} ({} items)",
            receipt.order_id,
            receipt.item_count
        );
        Ok(receipt)
    }

    pub fn toggle_wishlist(&mut self, item: WishlistItem) -> WishlistToggle {
        let name = item.name.clone();
        let outcome = self.wishlist.toggle(item);
        log::debug!("wishlist: {name} {outcome:?}");
        outcome
    }

    /// # Errors
    ///
    /// Returns [`WishlistError::EntryOutOfRange`] if no entry exists at `index`.
    pub fn remove_from_wishlist(&mut self, index: usize) -> Result<WishlistItem, WishlistError> {
        self.wishlist.remove(index)
    }

    /// Copy a wishlist entry into the cart with quantity 1. The entry stays in
    /// the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`WishlistError::EntryOutOfRange`] if no entry exists at `index`.
    pub fn add_to_cart_from_wishlist(&mut self, index: usize) -> Result<u32, WishlistError> {
        let entry = self
            .wishlist
            .get(index)
            .ok_or(WishlistError::EntryOutOfRange {
                index,
                len: self.wishlist.len(),
            })?;
        let item = CartItem::new(&entry.name, entry.price_paise, 1, &entry.image);
        Ok(self.add_to_cart(item))
    }

    /// Heart state for every product card in catalog order.
    #[must_use]
    pub fn hearts(&self, catalog: &Catalog) -> Vec<HeartState> {
        self.wishlist.reconcile_hearts(catalog.names())
    }
}
