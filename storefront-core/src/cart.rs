//! Shopping cart
//!
//! Lines are keyed by product name and kept in insertion order, which is also
//! the display order. Positional operations address lines by that order.
use crate::money::line_total;
use crate::quantity::{MIN_QUANTITY, parse_quantity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One aggregated cart entry for a unique product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price_paise: u64,
    /// Always at least [`MIN_QUANTITY`].
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    /// Build a line, clamping the quantity up to 1.
    #[must_use]
    pub fn new(name: &str, price_paise: u64, quantity: u32, image: &str) -> Self {
        Self {
            name: name.to_string(),
            price_paise,
            quantity: quantity.max(MIN_QUANTITY),
            image: image.to_string(),
        }
    }

    #[must_use]
    pub fn subtotal_paise(&self) -> u64 {
        line_total(self.price_paise, self.quantity)
    }
}

/// Values derived from the cart on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub total_paise: u64,
    /// Sum of quantities.
    pub item_count: u64,
    /// Distinct lines, shown as the cart badge.
    pub line_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("cart line {index} out of range (cart has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find a cart line by product name.
    #[must_use]
    pub fn find_line(&self, name: &str) -> Option<&CartItem> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Get the current quantity of a product in the cart.
    #[must_use]
    pub fn get_quantity(&self, name: &str) -> u32 {
        self.find_line(name).map_or(0, |line| line.quantity)
    }

    /// Add an item, merging into an existing line with the same name.
    /// Returns the resulting quantity of that line.
    pub fn add_item(&mut self, item: CartItem) -> u32 {
        let added = item.quantity.max(MIN_QUANTITY);
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == item.name) {
            line.quantity = line.quantity.saturating_add(added);
            line.quantity
        } else {
            self.lines.push(CartItem {
                quantity: added,
                ..item
            });
            added
        }
    }

    /// Replace a line's quantity from raw input text.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] if no line exists at `index`.
    pub fn update_quantity(&mut self, index: usize, raw: &str) -> Result<u32, CartError> {
        self.set_quantity(index, parse_quantity(raw))
    }

    /// Replace a line's quantity, clamping it up to 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] if no line exists at `index`.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<u32, CartError> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange { index, len })?;
        line.quantity = quantity.max(MIN_QUANTITY);
        Ok(line.quantity)
    }

    /// Remove the line at `index`; remaining lines keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineOutOfRange`] if no line exists at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<CartItem, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Empty the cart, handing back its lines.
    pub fn take_lines(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.lines)
    }

    #[must_use]
    pub fn total_paise(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal_paise()))
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_paise: self.total_paise(),
            item_count: self.item_count(),
            line_count: self.lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: u64, qty: u32) -> CartItem {
        CartItem::new(name, price, qty, &format!("static/img/{name}.jpg"))
    }

    #[test]
    fn adding_same_name_aggregates_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(item("A", 10, 1)), 1);
        assert_eq!(cart.add_item(item("A", 10, 2)), 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_quantity("A"), 3);
        assert_eq!(cart.total_paise(), 30);
    }

    #[test]
    fn aggregation_keeps_first_price_and_image() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("A", 10, 1, "first.jpg"));
        cart.add_item(CartItem::new("A", 99, 1, "second.jpg"));
        let line = cart.find_line("A").unwrap();
        assert_eq!(line.price_paise, 10);
        assert_eq!(line.image, "first.jpg");
    }

    #[test]
    fn zero_quantity_items_are_added_as_one() {
        let mut cart = Cart::new();
        let zero = CartItem {
            quantity: 0,
            ..item("B", 5, 1)
        };
        assert_eq!(cart.add_item(zero), 1);
    }

    #[test]
    fn update_quantity_clamps_invalid_input() {
        let mut cart = Cart::new();
        cart.add_item(item("A", 10, 4));
        assert_eq!(cart.update_quantity(0, "-3"), Ok(1));
        assert_eq!(cart.update_quantity(0, "abc"), Ok(1));
        assert_eq!(cart.update_quantity(0, "7"), Ok(7));
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn out_of_range_operations_report_errors() {
        let mut cart = Cart::new();
        cart.add_item(item("A", 10, 1));
        assert_eq!(
            cart.update_quantity(3, "2"),
            Err(CartError::LineOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            cart.remove_line(1),
            Err(CartError::LineOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn removing_a_line_preserves_relative_order() {
        let mut cart = Cart::new();
        for name in ["A", "B", "C", "D"] {
            cart.add_item(item(name, 1, 1));
        }
        let removed = cart.remove_line(1).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "D"]);
    }

    #[test]
    fn summary_tracks_totals_counts_and_lines() {
        let mut cart = Cart::new();
        cart.add_item(item("A", 250, 2));
        cart.add_item(item("B", 100, 3));
        let summary = cart.summary();
        assert_eq!(summary.total_paise, 800);
        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.line_count, 2);

        cart.clear();
        assert_eq!(cart.summary(), CartSummary::default());
    }
}
