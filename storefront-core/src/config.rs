//! Store tunables
use serde::{Deserialize, Serialize};

const DEFAULT_STORE_DATA: &str =
    include_str!("../../storefront-web/static/assets/data/store.json");

/// Timing, order-id and display settings shared by the session and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Delay before the tracking stub reports a status.
    pub tracking_delay_ms: u32,
    /// How long an add button shows its "added" label.
    pub added_feedback_ms: u32,
    pub order_prefix: String,
    /// Number of trailing timestamp digits kept in an order id.
    pub order_digits: u32,
    pub currency_symbol: String,
    pub indicator: IndicatorConfig,
}

/// Placement of the sliding tab indicator relative to its button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub inset_px: f64,
    pub min_width_px: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tracking_delay_ms: 900,
            added_feedback_ms: 700,
            order_prefix: String::from("ORD"),
            order_digits: 6,
            currency_symbol: String::from("₹"),
            indicator: IndicatorConfig::default(),
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            inset_px: 8.0,
            min_width_px: 48.0,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_STORE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Order-id digit count limited to what a millisecond timestamp can supply.
    #[must_use]
    pub fn order_digits_clamped(&self) -> u32 {
        self.order_digits.clamp(1, 12)
    }
}
