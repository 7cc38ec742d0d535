use anyhow::Result;
use rand::Rng;
use storefront_core::{Slide, SlideNavigator};

use super::TestScenario;
use crate::logic::{ShopSummary, Shopper, ShoppingPlan};

/// Click tabs and "go to" buttons, including indices no tab carries.
fn navigation_visit(shopper: &mut Shopper, steps: usize) -> Result<()> {
    let mut expected = SlideNavigator::new();
    anyhow::ensure!(
        shopper.session.active_slide() == Slide::Home,
        "a fresh session should start on the home slide"
    );

    for _ in 0..steps {
        let index = shopper.rng().gen_range(0..=7u8);
        let moved = shopper.navigate(index);
        anyhow::ensure!(
            moved == expected.select_index(index),
            "slide {index} acceptance mismatch"
        );
        anyhow::ensure!(
            shopper.session.active_slide() == expected.active(),
            "after goto {index} expected {:?}, showing {:?}",
            expected.active(),
            shopper.session.active_slide()
        );
    }

    Ok(())
}

fn untouched_expectation(summary: &ShopSummary) -> Result<()> {
    anyhow::ensure!(
        summary.session.cart().is_empty() && summary.session.wishlist().is_empty(),
        "navigation should not change the cart or wishlist"
    );
    anyhow::ensure!(
        Slide::ALL.contains(&summary.session.active_slide()),
        "exactly one known slide should be active"
    );
    Ok(())
}

pub fn navigation_scenario() -> TestScenario {
    TestScenario::new(
        "Slide Navigation",
        ShoppingPlan::new(navigation_visit).with_expectation(untouched_expectation),
    )
}
