//! Quantity input handling
//!
//! Quantities come from free-form number inputs. Anything that is not a
//! number of at least one is clamped up to [`MIN_QUANTITY`] rather than rejected.

pub const MIN_QUANTITY: u32 = 1;

/// Parse a quantity input, clamping invalid or sub-1 values to 1.
///
/// Fractional values are truncated (`"2.7"` becomes 2).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_quantity(raw: &str) -> u32 {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return MIN_QUANTITY;
    };
    if !value.is_finite() || value < f64::from(MIN_QUANTITY) {
        return MIN_QUANTITY;
    }
    value.floor().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_inputs_clamp_to_one() {
        for raw in ["-3", "abc", "", "   ", "0", "0.4", "NaN", "inf", "-inf"] {
            assert_eq!(parse_quantity(raw), 1, "input {raw:?}");
        }
    }

    #[test]
    fn valid_inputs_parse() {
        assert_eq!(parse_quantity("1"), 1);
        assert_eq!(parse_quantity(" 4 "), 4);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity("1e2"), 100);
    }

    #[test]
    fn huge_inputs_saturate() {
        assert_eq!(parse_quantity("99999999999999"), u32::MAX);
    }
}
