//! Money display helpers.
//!
//! The backend speaks plain JSON numbers for prices and totals; those fields
//! deserialize into [`rust_decimal::Decimal`] so client-side arithmetic
//! (line totals, cart subtotals) stays exact.

use rust_decimal::Decimal;

/// Format a decimal amount as a US-dollar display string, e.g. `$19.99`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_two_places() {
        assert_eq!(format_usd(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_usd(Decimal::new(25, 0)), "$25.00");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_usd_rounds_display() {
        // 10.005 displays as two decimal places
        let amount = Decimal::new(10_005, 3);
        let display = format_usd(amount);
        assert!(display.starts_with("$10.0"));
    }
}
