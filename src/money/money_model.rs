//! Amount value object.
//!
//! Monetary values are an integer number of minor currency units (cents).
//! Construction rejects fractional input, and arithmetic goes back through
//! construction, so any `Amount` a caller can hold is a whole number of
//! cents regardless of the deltas applied to it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A validated monetary amount in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount {
    value: i64,
}

impl Amount {
    /// Creates an amount from a decimal value.
    ///
    /// Fails unless the value is a mathematical integer that fits in `i64`.
    /// Any sign and zero are accepted.
    pub fn new(value: Decimal) -> Result<Self> {
        if !value.is_integer() {
            return Err(Error::Validation(ValidationError::InvalidAmount(format!(
                "'{}' is not an integer number of cents",
                value
            ))));
        }
        let value = value.to_i64().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidAmount(format!(
                "'{}' is out of range",
                value
            )))
        })?;
        Ok(Self { value })
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { value: 0 }
    }

    /// The amount in minor currency units.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The amount as a decimal, for arithmetic with fallible inputs.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.value)
    }

    /// Returns a new amount increased by `delta`.
    ///
    /// The result is re-validated, so a fractional delta fails instead of
    /// silently producing a non-integer amount.
    pub fn add(&self, delta: Decimal) -> Result<Self> {
        Self::new(self.as_decimal() + delta)
    }

    /// Returns a new amount decreased by `delta`. Re-validates like [`Amount::add`].
    pub fn subtract(&self, delta: Decimal) -> Result<Self> {
        Self::new(self.as_decimal() - delta)
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_fractional_value() {
        let result = Amount::new(dec!(5.69));
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn test_accepts_zero_and_negative_integers() {
        assert_eq!(Amount::new(dec!(0)).unwrap().value(), 0);
        assert_eq!(Amount::new(dec!(-569)).unwrap().value(), -569);
        assert_eq!(Amount::new(dec!(569)).unwrap().value(), 569);
    }

    #[test]
    fn test_add_and_subtract_keep_integer_invariant() {
        let amount = Amount::new(dec!(678)).unwrap();
        let after = amount.add(dec!(-5060)).unwrap();
        assert_eq!(after.value(), -4382);
        assert_eq!(after.subtract(dec!(-5060)).unwrap(), amount);
    }

    #[test]
    fn test_fractional_delta_fails() {
        let amount = Amount::new(dec!(100)).unwrap();
        assert!(amount.add(dec!(0.5)).is_err());
        assert!(amount.subtract(dec!(0.01)).is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let amount = Amount::new(dec!(-4382)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "-4382");
    }
}
