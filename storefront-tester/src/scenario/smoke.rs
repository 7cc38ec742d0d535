use anyhow::{Context, Result};
use storefront_core::{OrderId, Slide, TrackingState};

use super::TestScenario;
use crate::logic::{ShopSummary, Shopper, ShoppingPlan};

/// Browse products, add one, check out from the cart and track the order.
fn smoke_visit(shopper: &mut Shopper, _steps: usize) -> Result<()> {
    shopper.navigate(Slide::Products.index());
    shopper.add_random().context("catalog has no products")?;
    shopper.navigate(Slide::Cart.index());
    let receipt = shopper.checkout()?;
    shopper.navigate(Slide::Track.index());
    shopper.track(receipt.order_id.as_str());
    Ok(())
}

fn smoke_expectation(summary: &ShopSummary) -> Result<()> {
    anyhow::ensure!(summary.receipts.len() == 1, "expected exactly one order");
    let receipt = &summary.receipts[0];
    anyhow::ensure!(
        OrderId::matches_format(receipt.order_id.as_str(), summary.session.config()),
        "malformed order id {}",
        receipt.order_id
    );
    anyhow::ensure!(
        receipt.item_count >= 1 && receipt.lines.len() == 1,
        "receipt should hold the single added line"
    );
    anyhow::ensure!(
        summary.session.cart().is_empty(),
        "cart should be empty after checkout"
    );
    anyhow::ensure!(
        summary.session.badges().cart_lines == 0,
        "cart badge should reset after checkout"
    );
    anyhow::ensure!(
        summary.session.active_slide() == Slide::Track,
        "visit should end on the tracking slide"
    );
    anyhow::ensure!(
        summary.lookups
            == vec![TrackingState::Resolved {
                order_id: receipt.order_id.to_string()
            }],
        "tracking should resolve the placed order"
    );
    Ok(())
}

pub fn smoke_scenario() -> TestScenario {
    TestScenario::new(
        "Smoke Test",
        ShoppingPlan::new(smoke_visit).with_expectation(smoke_expectation),
    )
}
