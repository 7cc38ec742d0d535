use anyhow::Result;
use rand::Rng;
use std::collections::HashSet;
use storefront_core::{CartItem, parse_quantity};

use super::TestScenario;
use crate::logic::{ShopSummary, Shopper, ShoppingPlan};

/// Expected cart contents as (name, price, quantity) in display order.
type CartModel = Vec<(String, u64, u32)>;

fn model_add(model: &mut CartModel, name: &str, price_paise: u64, quantity: u32) {
    if let Some(line) = model.iter_mut().find(|(n, _, _)| n == name) {
        line.2 = line.2.saturating_add(quantity);
    } else {
        model.push((name.to_string(), price_paise, quantity));
    }
}

fn ensure_matches(lines: &[CartItem], model: &CartModel) -> Result<()> {
    let actual: CartModel = lines
        .iter()
        .map(|line| (line.name.clone(), line.price_paise, line.quantity))
        .collect();
    anyhow::ensure!(
        &actual == model,
        "cart diverged: got {actual:?}, expected {model:?}"
    );
    Ok(())
}

/// Random adds, quantity edits, removals and clears checked step by step.
fn cart_visit(shopper: &mut Shopper, steps: usize) -> Result<()> {
    let mut model = CartModel::new();

    for _ in 0..steps {
        let roll = shopper.rng().gen_range(0..10);
        let len = shopper.session.cart().len();
        match roll {
            0..=5 => {
                if let Some((product, raw)) = shopper.add_random() {
                    model_add(
                        &mut model,
                        &product.name,
                        product.price_paise,
                        parse_quantity(raw),
                    );
                }
            }
            6 | 7 if len > 0 => {
                let index = shopper.rng().gen_range(0..len);
                let raw = shopper.pick_quantity_input();
                let quantity = shopper.session.update_quantity(index, raw)?;
                shopper.record(format!("qty #{index} {raw:?} -> x{quantity}"));
                model[index].2 = parse_quantity(raw);
            }
            8 if len > 0 => {
                let index = shopper.rng().gen_range(0..len);
                let removed = shopper.session.remove_cart_line(index)?;
                shopper.record(format!("remove #{index} {}", removed.name));
                model.remove(index);
            }
            9 => {
                let confirmed = shopper.rng().gen_bool(0.5);
                let needed = shopper.session.clear_needs_confirmation();
                let cleared = shopper.session.clear_cart(confirmed);
                shopper.record(format!("clear confirmed={confirmed} -> {cleared}"));
                anyhow::ensure!(
                    needed == !model.is_empty(),
                    "clear confirmation should be asked only for a non-empty cart"
                );
                if confirmed {
                    model.clear();
                }
            }
            _ => {
                let out_of_range = shopper.session.update_quantity(len, "3");
                anyhow::ensure!(
                    out_of_range.is_err(),
                    "editing line {len} of a {len}-line cart should fail"
                );
            }
        }
        ensure_matches(shopper.session.cart().lines(), &model)?;
    }

    Ok(())
}

fn totals_expectation(summary: &ShopSummary) -> Result<()> {
    let cart = summary.session.cart();
    let cart_summary = summary.session.cart_summary();
    let expected_total: u64 = cart.lines().iter().map(CartItem::subtotal_paise).sum();
    let expected_count: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
    anyhow::ensure!(
        cart_summary.total_paise == expected_total,
        "total {} != sum of subtotals {expected_total}",
        cart_summary.total_paise
    );
    anyhow::ensure!(
        cart_summary.item_count == expected_count,
        "item count {} != sum of quantities {expected_count}",
        cart_summary.item_count
    );
    anyhow::ensure!(
        summary.session.badges().cart_lines == cart.len(),
        "cart badge should count lines"
    );
    Ok(())
}

fn unique_lines_expectation(summary: &ShopSummary) -> Result<()> {
    let lines = summary.session.cart().lines();
    let names: HashSet<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    anyhow::ensure!(names.len() == lines.len(), "duplicate cart lines");
    anyhow::ensure!(
        lines.iter().all(|l| l.quantity >= 1),
        "every line should keep a quantity of at least 1"
    );
    Ok(())
}

pub fn cart_scenario() -> TestScenario {
    TestScenario::new(
        "Cart Aggregation and Editing",
        ShoppingPlan::new(cart_visit)
            .with_steps(40)
            .with_expectation(totals_expectation)
            .with_expectation(unique_lines_expectation),
    )
}
