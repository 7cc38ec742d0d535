pub mod plan;
pub mod reports;
pub mod shopper;
pub mod tester;

pub use plan::ShoppingPlan;
pub use shopper::{ShopSummary, Shopper};
pub use tester::*;
