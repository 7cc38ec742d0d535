use anyhow::Result;
use rand::Rng;
use std::collections::HashSet;

use super::TestScenario;
use crate::logic::{ShopSummary, Shopper, ShoppingPlan};

fn wishlist_names(shopper: &Shopper) -> Vec<String> {
    shopper
        .session
        .wishlist()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

/// Toggle hearts, remove entries and move entries into the cart.
fn wishlist_visit(shopper: &mut Shopper, steps: usize) -> Result<()> {
    let mut model: Vec<String> = Vec::new();

    for _ in 0..steps {
        let roll = shopper.rng().gen_range(0..10);
        let len = model.len();
        match roll {
            0..=4 => {
                if let Some(product) = shopper.toggle_random() {
                    if let Some(pos) = model.iter().position(|n| *n == product.name) {
                        model.remove(pos);
                    } else {
                        model.push(product.name);
                    }
                }
            }
            5 | 6 if len > 0 => {
                let index = shopper.rng().gen_range(0..len);
                let removed = shopper.session.remove_from_wishlist(index)?;
                shopper.record(format!("unwish #{index} {}", removed.name));
                model.remove(index);
            }
            7 | 8 if len > 0 => {
                let index = shopper.rng().gen_range(0..len);
                let name = model[index].clone();
                let before = shopper.session.cart().get_quantity(&name);
                let after = shopper.session.add_to_cart_from_wishlist(index)?;
                shopper.record(format!("wish->cart #{index} {name} x{after}"));
                anyhow::ensure!(
                    after == before + 1,
                    "moving {name} to the cart should add exactly one"
                );
            }
            _ => {
                let outcome = shopper.session.remove_from_wishlist(len);
                anyhow::ensure!(
                    outcome.is_err(),
                    "removing entry {len} of a {len}-entry wishlist should fail"
                );
            }
        }
        let actual = wishlist_names(shopper);
        anyhow::ensure!(
            actual == model,
            "wishlist diverged: got {actual:?}, expected {model:?}"
        );
    }

    Ok(())
}

fn hearts_expectation(summary: &ShopSummary) -> Result<()> {
    let wishlist = summary.session.wishlist();
    for heart in summary.session.hearts(&summary.catalog) {
        anyhow::ensure!(
            heart.active == wishlist.contains(&heart.name),
            "heart for {} should be {}",
            heart.name,
            if heart.active { "empty" } else { "filled" }
        );
    }
    Ok(())
}

fn unique_entries_expectation(summary: &ShopSummary) -> Result<()> {
    let items = summary.session.wishlist().items();
    let names: HashSet<&str> = items.iter().map(|i| i.name.as_str()).collect();
    anyhow::ensure!(names.len() == items.len(), "duplicate wishlist entries");
    anyhow::ensure!(
        summary.session.badges().wishlist_entries == items.len(),
        "wishlist badge should count entries"
    );
    Ok(())
}

pub fn wishlist_scenario() -> TestScenario {
    TestScenario::new(
        "Wishlist Toggling and Hearts",
        ShoppingPlan::new(wishlist_visit)
            .with_steps(40)
            .with_expectation(hearts_expectation)
            .with_expectation(unique_entries_expectation),
    )
}
