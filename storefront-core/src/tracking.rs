//! Order tracking stub
//!
//! `Idle -> Checking -> Resolved`. No lookup happens: once the caller's delay
//! elapses, a checking request always resolves to the same canned status.
//! Blank input never leaves `Idle`; it shows `Invalid` instead.
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CHECKING_MESSAGE: &str = "Checking order status...";
pub const INVALID_MESSAGE: &str = "Please enter a valid Order ID.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackingError {
    #[error("order id is empty")]
    EmptyOrderId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingState {
    #[default]
    Idle,
    /// Inline validation error for blank input.
    Invalid,
    Checking {
        order_id: String,
    },
    Resolved {
        order_id: String,
    },
}

impl TrackingState {
    /// Start a lookup for the trimmed `raw` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::EmptyOrderId`] for empty or whitespace input.
    pub fn begin(raw: &str) -> Result<Self, TrackingError> {
        let order_id = raw.trim();
        if order_id.is_empty() {
            return Err(TrackingError::EmptyOrderId);
        }
        Ok(Self::Checking {
            order_id: order_id.to_string(),
        })
    }

    /// Finish a pending lookup. Any other state is returned unchanged.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Checking { order_id } => Self::Resolved { order_id },
            other => other,
        }
    }

    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Self::Checking { order_id } | Self::Resolved { order_id } => Some(order_id),
            Self::Idle | Self::Invalid => None,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Checking { .. })
    }

    /// Translation key for the status line, `None` while idle.
    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Invalid => Some("track.invalid"),
            Self::Checking { .. } => Some("track.checking"),
            Self::Resolved { .. } => Some("track.resolved"),
        }
    }

    /// Untranslated status line.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Invalid => Some(INVALID_MESSAGE.to_string()),
            Self::Checking { .. } => Some(CHECKING_MESSAGE.to_string()),
            Self::Resolved { order_id } => Some(resolved_message(order_id)),
        }
    }
}

#[must_use]
pub fn resolved_message(order_id: &str) -> String {
    format!("Order {order_id} — Out for delivery 🚚 (ETA: 30-60 min)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(TrackingState::begin(""), Err(TrackingError::EmptyOrderId));
        assert_eq!(
            TrackingState::begin(" \t\n"),
            Err(TrackingError::EmptyOrderId)
        );
        assert!(TrackingState::Invalid.is_error());
        assert_eq!(
            TrackingState::Invalid.message().as_deref(),
            Some(INVALID_MESSAGE)
        );
    }

    #[test]
    fn lookup_passes_through_two_messages() {
        let checking = TrackingState::begin("  ORD123456 ").unwrap();
        assert!(checking.is_pending());
        assert_eq!(checking.order_id(), Some("ORD123456"));
        let first = checking.message().unwrap();
        assert_eq!(first, CHECKING_MESSAGE);

        let resolved = checking.resolve();
        let second = resolved.message().unwrap();
        assert!(second.contains("ORD123456"));
        assert_ne!(first, second);
        assert_eq!(resolved.message_key(), Some("track.resolved"));
    }

    #[test]
    fn identifier_is_embedded_verbatim() {
        let resolved = TrackingState::begin("my <weird> id").unwrap().resolve();
        assert_eq!(
            resolved.message().unwrap(),
            "Order my <weird> id — Out for delivery 🚚 (ETA: 30-60 min)"
        );
    }

    #[test]
    fn resolve_is_inert_outside_checking() {
        assert_eq!(TrackingState::Idle.resolve(), TrackingState::Idle);
        assert_eq!(TrackingState::Invalid.resolve(), TrackingState::Invalid);
        let done = TrackingState::begin("A").unwrap().resolve();
        assert_eq!(done.clone().resolve(), done);
        assert_eq!(TrackingState::Idle.message(), None);
    }
}
