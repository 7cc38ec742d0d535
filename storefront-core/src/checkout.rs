//! Fake checkout: order ids are synthesized from the clock, nothing is stored.
use crate::cart::{Cart, CartItem};
use crate::config::StoreConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static DEFAULT_ORDER_ID: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^ORD\d{6}$").ok());

/// Pseudo-random order identifier, e.g. `ORD483920`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Prefix followed by the trailing digits of a millisecond timestamp,
    /// zero-padded to the configured width.
    #[must_use]
    pub fn from_timestamp_millis(now_ms: u64, cfg: &StoreConfig) -> Self {
        let digits = cfg.order_digits_clamped();
        let modulus = 10_u64.pow(digits);
        let width = digits as usize;
        Self(format!(
            "{prefix}{tail:0width$}",
            prefix = cfg.order_prefix,
            tail = now_ms % modulus
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check `code` against the prefix and digit count in `cfg`.
    #[must_use]
    pub fn matches_format(code: &str, cfg: &StoreConfig) -> bool {
        let pattern = format!(
            r"^{}\d{{{}}}$",
            regex::escape(&cfg.order_prefix),
            cfg.order_digits_clamped()
        );
        Regex::new(&pattern)
            .map(|re| re.is_match(code))
            .unwrap_or(false)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `code` looks like an order id produced with the default settings.
#[must_use]
pub fn is_order_id_valid(code: &str) -> bool {
    DEFAULT_ORDER_ID
        .as_ref()
        .is_some_and(|re| re.is_match(code))
}

/// What was "ordered" at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub lines: Vec<CartItem>,
    pub total_paise: u64,
    pub item_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Place a fake order and empty the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] and leaves the cart untouched when
/// there is nothing to order.
pub fn checkout(
    cart: &mut Cart,
    now_ms: u64,
    cfg: &StoreConfig,
) -> Result<OrderReceipt, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let summary = cart.summary();
    let order_id = OrderId::from_timestamp_millis(now_ms, cfg);
    Ok(OrderReceipt {
        order_id,
        lines: cart.take_lines(),
        total_paise: summary.total_paise,
        item_count: summary.item_count,
    })
}
