//! Money type

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount.
///
/// Money carries no currency code; tables render it with the configured
/// currency symbol. Values of this type are formatted as currency even in
/// plain text columns.
///
/// # Example
///
/// ```
/// use datatable_lib::model::types::Money;
/// use rust_decimal::Decimal;
///
/// let fee = Money::new(Decimal::new(123450, 2));
/// assert_eq!(fee.format_with("$"), "$1,234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a Money value from whole units.
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Creates a Money value from a float, if it is finite.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64_retain(value).map(Self)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Formats the amount with two decimal places, thousands separators,
    /// and the given symbol in front (`-$5.00` for negative amounts).
    pub fn format_with(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if negative { "-" } else { "" };
        format!("{sign}{symbol}{grouped}.{cents}")
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        let money = Money::new(Decimal::new(123456789, 2));
        assert_eq!(money.format_with("$"), "$1,234,567.89");
    }

    #[test]
    fn test_format_pads_cents() {
        assert_eq!(Money::from_int(5).format_with("€"), "€5.00");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        let money = Money::new(Decimal::new(10005, 3)); // 10.005
        assert_eq!(money.format_with("$"), "$10.01");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Money::from_int(-5).format_with("$"), "-$5.00");
    }

    #[test]
    fn test_format_small_values() {
        let money = Money::new(Decimal::new(7, 2));
        assert_eq!(money.format_with("$"), "$0.07");
    }
}
