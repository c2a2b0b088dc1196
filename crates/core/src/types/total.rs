//! Order-total parsing.
//!
//! Order forms submit the total as display text, possibly with thousands
//! separators ("1,234.50"). Commas and surrounding whitespace are stripped
//! before parsing; whatever remains must be a non-negative decimal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated, non-negative order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTotal(Decimal);

/// Error parsing an order total from form text.
#[derive(Debug, Error)]
pub enum OrderTotalError {
    /// Input did not parse as a decimal number.
    #[error("not a valid amount: {0:?}")]
    Invalid(String),

    /// Input parsed but was negative.
    #[error("amount must not be negative: {0}")]
    Negative(Decimal),
}

impl OrderTotal {
    /// Parse a total from submitted text.
    ///
    /// Commas are treated as formatting and removed wherever they appear,
    /// matching what the order form produces.
    ///
    /// # Errors
    ///
    /// Returns `OrderTotalError::Invalid` for unparseable input and
    /// `OrderTotalError::Negative` for negative amounts.
    pub fn parse(raw: &str) -> Result<Self, OrderTotalError> {
        let cleaned = raw.replace(',', "");
        let cleaned = cleaned.trim();

        let amount: Decimal = cleaned
            .parse()
            .map_err(|_| OrderTotalError::Invalid(raw.to_owned()))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(OrderTotalError::Negative(amount));
        }

        Ok(Self(amount))
    }

    /// The parsed amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<OrderTotal> for Decimal {
    fn from(total: OrderTotal) -> Self {
        total.0
    }
}

impl std::fmt::Display for OrderTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_amounts() {
        let total = OrderTotal::parse("25000").unwrap();
        assert_eq!(total.amount(), Decimal::new(25000, 0));
    }

    #[test]
    fn strips_thousands_separators() {
        let total = OrderTotal::parse("1,234.50").unwrap();
        assert_eq!(total.amount(), Decimal::new(123_450, 2));
        assert_eq!(total.to_string(), "1234.50");
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let total = OrderTotal::parse("  99.90 ").unwrap();
        assert_eq!(total.to_string(), "99.90");
    }

    #[test]
    fn accepts_zero() {
        let total = OrderTotal::parse("0").unwrap();
        assert_eq!(total.amount(), Decimal::ZERO);
    }

    #[test]
    fn rejects_text() {
        assert!(matches!(
            OrderTotal::parse("abc"),
            Err(OrderTotalError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            OrderTotal::parse(""),
            Err(OrderTotalError::Invalid(_))
        ));
        assert!(matches!(
            OrderTotal::parse("   "),
            Err(OrderTotalError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            OrderTotal::parse("-10.00"),
            Err(OrderTotalError::Negative(_))
        ));
    }

    #[test]
    fn commas_are_stripped_blindly() {
        // "12,34" is treated as "1234", not rejected. The order form only
        // ever inserts commas as thousands separators.
        let total = OrderTotal::parse("12,34").unwrap();
        assert_eq!(total.amount(), Decimal::new(1234, 0));
    }
}
