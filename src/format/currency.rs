//! Currency formatting functionality.
//!
//! This module provides the pure formatting used everywhere money is shown:
//! half-up rounding to cents, thousands grouping, and a currency symbol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currency a monetary value is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// United States dollar.
    #[default]
    Usd,
}

impl Currency {
    /// Returns the symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
        }
    }
}

/// The locale controlling digit grouping and the decimal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English (United States): comma grouping, dot decimal separator.
    #[default]
    EnUs,
}

impl Locale {
    fn group_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
        }
    }
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, following standard
/// financial rounding conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_wizard::format::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value as a locale-aware currency string.
///
/// The value is rounded to cents, digits are grouped in threes, and the
/// currency symbol is prefixed. Negative values carry a leading minus sign
/// before the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_wizard::format::{Currency, Locale, format_currency};
///
/// assert_eq!(
///     format_currency(dec!(40000), Currency::Usd, Locale::EnUs),
///     "$40,000.00"
/// );
/// assert_eq!(
///     format_currency(dec!(2), Currency::Usd, Locale::EnUs),
///     "$2.00"
/// );
/// ```
pub fn format_currency(value: Decimal, currency: Currency, locale: Locale) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let magnitude = rounded.abs();

    // Two fixed decimal places after half-up rounding.
    let plain = format!("{:.2}", magnitude);
    let (int_part, frac_part) = plain
        .split_once('.')
        .unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}{}{}",
        sign,
        currency.symbol(),
        grouped,
        locale.decimal_separator(),
        frac_part
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(value: Decimal) -> String {
        format_currency(value, Currency::Usd, Locale::EnUs)
    }

    #[test]
    fn test_formats_grouped_thousands() {
        assert_eq!(usd(dec!(40000)), "$40,000.00");
        assert_eq!(usd(dec!(1234567.89)), "$1,234,567.89");
    }

    #[test]
    fn test_formats_small_amounts_without_grouping() {
        assert_eq!(usd(dec!(2)), "$2.00");
        assert_eq!(usd(dec!(999.99)), "$999.99");
    }

    #[test]
    fn test_formats_zero() {
        assert_eq!(usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_rounds_half_up_to_cents() {
        assert_eq!(usd(dec!(10.005)), "$10.01");
        assert_eq!(usd(dec!(10.004)), "$10.00");
    }

    #[test]
    fn test_negative_amounts_carry_leading_minus() {
        assert_eq!(usd(dec!(-1234.56)), "-$1,234.56");
    }

    #[test]
    fn test_exact_group_boundaries() {
        assert_eq!(usd(dec!(1000)), "$1,000.00");
        assert_eq!(usd(dec!(100000)), "$100,000.00");
        assert_eq!(usd(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn test_round_half_up_away_from_zero() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }
}
