//! Wishlist with toggle semantics.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub name: String,
    pub price_paise: u64,
    pub image: String,
}

impl WishlistItem {
    #[must_use]
    pub fn new(name: &str, price_paise: u64, image: &str) -> Self {
        Self {
            name: name.to_string(),
            price_paise,
            image: image.to_string(),
        }
    }
}

/// What a toggle did to the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WishlistError {
    #[error("wishlist entry {index} out of range (wishlist has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },
}

/// Heart icon state for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartState {
    pub name: String,
    pub active: bool,
}

impl HeartState {
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        if self.active { "♥" } else { "♡" }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WishlistItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Remove the entry if present by name, otherwise append it.
    pub fn toggle(&mut self, item: WishlistItem) -> WishlistToggle {
        if let Some(idx) = self.items.iter().position(|w| w.name == item.name) {
            self.items.remove(idx);
            WishlistToggle::Removed
        } else {
            self.items.push(item);
            WishlistToggle::Added
        }
    }

    /// Remove by position in display order.
    ///
    /// # Errors
    ///
    /// Returns [`WishlistError::EntryOutOfRange`] if no entry exists at `index`.
    pub fn remove(&mut self, index: usize) -> Result<WishlistItem, WishlistError> {
        if index >= self.items.len() {
            return Err(WishlistError::EntryOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    #[must_use]
    pub fn names(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Recompute every card's heart from wishlist membership.
    pub fn reconcile_hearts<'a>(
        &self,
        card_names: impl IntoIterator<Item = &'a str>,
    ) -> Vec<HeartState> {
        let names = self.names();
        card_names
            .into_iter()
            .map(|name| HeartState {
                name: name.to_string(),
                active: names.contains(name),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wish(name: &str) -> WishlistItem {
        WishlistItem::new(name, 100, "x.jpg")
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut list = Wishlist::new();
        list.toggle(wish("Z"));
        let before = list.clone();

        assert_eq!(list.toggle(wish("A")), WishlistToggle::Added);
        assert!(list.contains("A"));
        assert_eq!(list.toggle(wish("A")), WishlistToggle::Removed);
        assert_eq!(list, before);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut list = Wishlist::new();
        for name in ["A", "B", "C"] {
            list.toggle(wish(name));
        }
        list.toggle(wish("B"));
        let names: Vec<&str> = list.items().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn remove_by_index() {
        let mut list = Wishlist::new();
        list.toggle(wish("A"));
        list.toggle(wish("B"));
        assert_eq!(list.remove(0).unwrap().name, "A");
        assert_eq!(
            list.remove(5),
            Err(WishlistError::EntryOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn hearts_follow_membership() {
        let mut list = Wishlist::new();
        list.toggle(wish("B"));
        let hearts = list.reconcile_hearts(["A", "B", "C"]);
        let active: Vec<bool> = hearts.iter().map(|h| h.active).collect();
        assert_eq!(active, [false, true, false]);
        assert_eq!(hearts[1].glyph(), "♥");
        assert_eq!(hearts[0].glyph(), "♡");
    }
}
