//! Currency display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; formatting is a pure
//! function of the amount and an explicit [`CurrencyFormat`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How monetary amounts are rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Separator between groups of thousands.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
    /// Separator between the integer and fractional part.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Number of fractional digits.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Whether thousands are grouped.
    #[serde(default = "default_grouping")]
    pub grouping: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
            decimal_places: default_decimal_places(),
            grouping: default_grouping(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_grouping() -> bool {
    true
}

/// Formats an amount for display, e.g. `$300,000.00` or `-$100.00`.
///
/// Rounds with Banker's Rounding (MidpointNearestEven) to
/// `format.decimal_places`. A value that rounds to zero is never shown negative.
#[must_use]
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded =
        amount.round_dp_with_strategy(format.decimal_places, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = format.decimal_places as usize
    );
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    if format.grouping {
        out.push_str(&group_thousands(integer, &format.grouping_separator));
    } else {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push_str(&format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(3), "$3.00")]
    #[case(dec!(-100.0000), "-$100.00")]
    #[case(dec!(300000.0000), "$300,000.00")]
    #[case(dec!(441.666666), "$441.67")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(999.995), "$1,000.00")]
    #[case(dec!(-0.001), "$0.00")]
    fn test_format_currency_default(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount, &CurrencyFormat::default()), expected);
    }

    #[test]
    fn test_format_currency_without_grouping() {
        let format = CurrencyFormat {
            grouping: false,
            ..CurrencyFormat::default()
        };
        assert_eq!(format_currency(dec!(1234567.5), &format), "$1234567.50");
    }

    #[test]
    fn test_format_currency_custom_locale() {
        let format = CurrencyFormat {
            symbol: "€".to_string(),
            grouping_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimal_places: 2,
            grouping: true,
        };
        assert_eq!(format_currency(dec!(2650), &format), "€2.650,00");
    }

    #[test]
    fn test_format_currency_zero_places() {
        let format = CurrencyFormat {
            decimal_places: 0,
            ..CurrencyFormat::default()
        };
        assert_eq!(format_currency(dec!(1855.4), &format), "$1,855");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("123456", ","), "123,456");
    }
}
