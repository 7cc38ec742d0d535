//! Rupee amounts held as integer paise.

pub const PAISE_PER_RUPEE: u64 = 100;

/// Format an amount with the given currency symbol.
///
/// Whole-rupee amounts print without a fractional part (`₹499`), anything
/// else prints two decimals (`₹599.50`).
#[must_use]
pub fn format_price(paise: u64, symbol: &str) -> String {
    let whole = paise / PAISE_PER_RUPEE;
    let frac = paise % PAISE_PER_RUPEE;
    if frac == 0 {
        format!("{symbol}{whole}")
    } else {
        format!("{symbol}{whole}.{frac:02}")
    }
}

/// Price times quantity, saturating instead of wrapping.
#[must_use]
pub fn line_total(price_paise: u64, quantity: u32) -> u64 {
    price_paise.saturating_mul(u64::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rupees_drop_the_fraction() {
        assert_eq!(format_price(0, "₹"), "₹0");
        assert_eq!(format_price(49_900, "₹"), "₹499");
        assert_eq!(format_price(1_000, "Rs "), "Rs 10");
    }

    #[test]
    fn fractional_amounts_keep_two_digits() {
        assert_eq!(format_price(59_950, "₹"), "₹599.50");
        assert_eq!(format_price(5, "₹"), "₹0.05");
    }

    #[test]
    fn line_total_saturates() {
        assert_eq!(line_total(1_000, 3), 3_000);
        assert_eq!(line_total(u64::MAX, 2), u64::MAX);
    }
}
