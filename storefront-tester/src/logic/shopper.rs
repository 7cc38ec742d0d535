//! Seeded shopper that drives a [`StoreSession`] the way a visitor would.
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use storefront_core::{
    Catalog, CheckoutError, OrderReceipt, Product, StoreConfig, StoreSession, TrackingState,
};

/// Raw quantity inputs a visitor might type, valid or not.
const QUANTITY_INPUTS: [&str; 9] = ["1", "2", "3", "5", " 4 ", "2.7", "0", "-1", "abc"];

/// Earliest clock reading handed to checkout.
const CLOCK_BASE_MS: u64 = 1_760_000_000_000;

pub struct Shopper {
    pub session: StoreSession,
    pub catalog: Catalog,
    rng: ChaCha8Rng,
    clock_ms: u64,
    receipts: Vec<OrderReceipt>,
    lookups: Vec<TrackingState>,
    actions: Vec<String>,
}

/// Everything a run produced, checked by scenario expectations.
#[derive(Debug, Clone)]
pub struct ShopSummary {
    pub seed: u64,
    pub session: StoreSession,
    pub catalog: Catalog,
    pub receipts: Vec<OrderReceipt>,
    pub lookups: Vec<TrackingState>,
    pub actions: Vec<String>,
}

impl Shopper {
    #[must_use]
    pub fn new(catalog: Catalog, config: StoreConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clock_ms = CLOCK_BASE_MS + rng.gen_range(0..1_000_000_000);
        Self {
            session: StoreSession::new(config),
            catalog,
            rng,
            clock_ms,
            receipts: Vec::new(),
            lookups: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn pick_product(&mut self) -> Option<Product> {
        self.catalog.products.choose(&mut self.rng).cloned()
    }

    pub fn pick_quantity_input(&mut self) -> &'static str {
        QUANTITY_INPUTS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("1")
    }

    /// Add a random product with a random quantity input. Returns the product
    /// and the raw input used.
    pub fn add_random(&mut self) -> Option<(Product, &'static str)> {
        let product = self.pick_product()?;
        let raw = self.pick_quantity_input();
        let quantity = self.session.add_product(&product, raw);
        self.record(format!("add {} {raw:?} -> x{quantity}", product.name));
        Some((product, raw))
    }

    pub fn toggle_random(&mut self) -> Option<Product> {
        let product = self.pick_product()?;
        let outcome = self.session.toggle_wishlist(product.wishlist_item());
        self.record(format!("wish {} {outcome:?}", product.name));
        Some(product)
    }

    pub fn navigate(&mut self, index: u8) -> bool {
        let moved = self.session.select_slide(index);
        self.record(format!("goto {index} ({moved})"));
        moved
    }

    /// Advance the clock by a few seconds and check out.
    ///
    /// # Errors
    ///
    /// Propagates [`CheckoutError::EmptyCart`].
    pub fn checkout(&mut self) -> Result<OrderReceipt, CheckoutError> {
        self.clock_ms += self.rng.gen_range(1_000..60_000);
        let receipt = self.session.checkout(self.clock_ms)?;
        self.record(format!("checkout {}", receipt.order_id));
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    /// Submit a tracking lookup and let the stub resolve it.
    pub fn track(&mut self, raw: &str) -> TrackingState {
        let state =
            TrackingState::begin(raw).map_or(TrackingState::Invalid, TrackingState::resolve);
        self.record(format!("track {raw:?} -> {state:?}"));
        self.lookups.push(state.clone());
        state
    }

    pub fn record(&mut self, action: String) {
        log::trace!("{action}");
        self.actions.push(action);
    }

    #[must_use]
    pub fn finish(self, seed: u64) -> ShopSummary {
        ShopSummary {
            seed,
            session: self.session,
            catalog: self.catalog,
            receipts: self.receipts,
            lookups: self.lookups,
            actions: self.actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shopper(seed: u64) -> Shopper {
        Shopper::new(
            Catalog::load_from_static(),
            StoreConfig::default_config(),
            seed,
        )
    }

    #[test]
    fn same_seed_same_actions() {
        let run = |seed| {
            let mut s = shopper(seed);
            for _ in 0..8 {
                s.add_random();
                s.toggle_random();
            }
            s.finish(seed).actions
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn checkout_records_receipt() {
        let mut s = shopper(1);
        s.add_random().unwrap();
        let receipt = s.checkout().unwrap();
        let summary = s.finish(1);
        assert_eq!(summary.receipts, vec![receipt]);
        assert!(summary.session.cart().is_empty());
    }

    #[test]
    fn blank_tracking_is_invalid() {
        let mut s = shopper(3);
        assert_eq!(s.track("   "), TrackingState::Invalid);
        assert_eq!(s.track(" ORD1 ").order_id(), Some("ORD1"));
    }
}
