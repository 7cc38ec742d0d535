use crate::logic::ShoppingPlan;

pub mod cart;
pub mod navigation;
pub mod orders;
pub mod smoke;
pub mod wishlist;

/// A named scripted visit run by the logic tester.
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: &'static str,
    pub plan: ShoppingPlan,
}

impl TestScenario {
    #[must_use]
    pub const fn new(name: &'static str, plan: ShoppingPlan) -> Self {
        Self { name, plan }
    }
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(smoke::smoke_scenario()),
        "cart" | "cart-aggregation" => Some(cart::cart_scenario()),
        "wishlist" | "hearts" => Some(wishlist::wishlist_scenario()),
        "checkout" | "orders" => Some(orders::checkout_scenario()),
        "tracking" | "track" => Some(orders::tracking_scenario()),
        "navigation" | "slides" => Some(navigation::navigation_scenario()),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("cart", "Cart Aggregation and Editing"),
        ("wishlist", "Wishlist Toggling and Hearts"),
        ("checkout", "Fake Checkout"),
        ("tracking", "Order Tracking Stub"),
        ("navigation", "Slide Navigation"),
    ]
}
