//! Fake checkout and the tracking stub.
use anyhow::{Context, Result};
use rand::Rng;
use storefront_core::{CheckoutError, OrderId, TrackingState, tracking::resolved_message};

use super::TestScenario;
use crate::logic::{ShopSummary, Shopper, ShoppingPlan};

const BLANK_INPUTS: [&str; 3] = ["", "   ", "\t\n"];

/// Fill the cart a few times and check out each time, with an empty checkout
/// attempt after every order.
fn checkout_visit(shopper: &mut Shopper, steps: usize) -> Result<()> {
    let orders = (steps / 4).max(1);
    for _ in 0..orders {
        let adds = shopper.rng().gen_range(1..=4);
        for _ in 0..adds {
            shopper.add_random().context("catalog has no products")?;
        }
        let before = shopper.session.cart_summary();
        let lines = shopper.session.cart().lines().to_vec();

        let receipt = shopper.checkout()?;
        anyhow::ensure!(
            receipt.total_paise == before.total_paise && receipt.item_count == before.item_count,
            "receipt totals should match the cart at checkout"
        );
        anyhow::ensure!(receipt.lines == lines, "receipt should keep the cart lines");
        anyhow::ensure!(
            shopper.session.cart().is_empty(),
            "cart should be empty after an order"
        );

        let untouched = shopper.session.clone();
        let empty = shopper.checkout();
        anyhow::ensure!(
            matches!(empty, Err(CheckoutError::EmptyCart)),
            "empty checkout should be refused"
        );
        anyhow::ensure!(
            shopper.session == untouched,
            "a refused checkout should leave the session unchanged"
        );
    }
    Ok(())
}

fn order_id_expectation(summary: &ShopSummary) -> Result<()> {
    anyhow::ensure!(!summary.receipts.is_empty(), "no orders were placed");
    for receipt in &summary.receipts {
        anyhow::ensure!(
            OrderId::matches_format(receipt.order_id.as_str(), summary.session.config()),
            "malformed order id {}",
            receipt.order_id
        );
    }
    Ok(())
}

/// Submit a mix of padded order ids and blank inputs.
fn tracking_visit(shopper: &mut Shopper, steps: usize) -> Result<()> {
    for _ in 0..steps {
        if shopper.rng().gen_bool(0.25) {
            let pick = shopper.rng().gen_range(0..BLANK_INPUTS.len());
            let state = shopper.track(BLANK_INPUTS[pick]);
            anyhow::ensure!(
                state == TrackingState::Invalid,
                "blank input should be rejected"
            );
            continue;
        }

        let code = format!("ORD{:06}", shopper.rng().gen_range(0..1_000_000));
        let pad = " ".repeat(shopper.rng().gen_range(0..3));
        let state = shopper.track(&format!("{pad}{code}{pad}"));
        anyhow::ensure!(
            state.order_id() == Some(code.as_str()),
            "tracking should report the trimmed id {code}"
        );
        anyhow::ensure!(
            state.message() == Some(resolved_message(&code)),
            "unexpected status for {code}"
        );
    }
    Ok(())
}

fn lookups_expectation(summary: &ShopSummary) -> Result<()> {
    anyhow::ensure!(
        summary
            .lookups
            .iter()
            .all(|s| !s.is_pending() && *s != TrackingState::Idle),
        "every lookup should settle"
    );
    anyhow::ensure!(
        summary.receipts.is_empty() && summary.session.cart().is_empty(),
        "tracking should not place orders or touch the cart"
    );
    Ok(())
}

pub fn checkout_scenario() -> TestScenario {
    TestScenario::new(
        "Fake Checkout",
        ShoppingPlan::new(checkout_visit).with_expectation(order_id_expectation),
    )
}

pub fn tracking_scenario() -> TestScenario {
    TestScenario::new(
        "Order Tracking Stub",
        ShoppingPlan::new(tracking_visit)
            .with_steps(16)
            .with_expectation(lookups_expectation),
    )
}
