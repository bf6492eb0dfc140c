//! Percentage formatting functionality.

use rust_decimal::Decimal;

/// Formats an already-scaled percentage value (e.g. `83.5` for 83.5%).
///
/// The value is rounded to a whole percent, half-up. No clamping is applied:
/// values above 100 format as-is so an over-committed allowance is visible.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_wizard::format::format_percent;
///
/// assert_eq!(format_percent(dec!(83.5)), "84%");
/// assert_eq!(format_percent(dec!(120)), "120%");
/// ```
pub fn format_percent(percent: Decimal) -> String {
    let rounded =
        percent.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}

/// Formats a fraction (e.g. `0.0765`) as a percentage string (`"7.65%"`).
///
/// Up to two decimal places are kept; trailing zeros are trimmed.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_wizard::format::format_fraction_as_percent;
///
/// assert_eq!(format_fraction_as_percent(dec!(0.0765)), "7.65%");
/// assert_eq!(format_fraction_as_percent(dec!(0.1)), "10%");
/// ```
pub fn format_fraction_as_percent(fraction: Decimal) -> String {
    let scaled = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", scaled.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_rounds_to_whole() {
        assert_eq!(format_percent(dec!(83.4)), "83%");
        assert_eq!(format_percent(dec!(83.5)), "84%");
    }

    #[test]
    fn test_percent_does_not_clamp_above_100() {
        assert_eq!(format_percent(dec!(137.2)), "137%");
    }

    #[test]
    fn test_percent_zero() {
        assert_eq!(format_percent(Decimal::ZERO), "0%");
    }

    #[test]
    fn test_fraction_scales_by_100() {
        assert_eq!(format_fraction_as_percent(dec!(0.5)), "50%");
        assert_eq!(format_fraction_as_percent(dec!(0.0765)), "7.65%");
    }

    #[test]
    fn test_fraction_trims_trailing_zeros() {
        assert_eq!(format_fraction_as_percent(dec!(0.250)), "25%");
    }
}
