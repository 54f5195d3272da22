use serde::{Deserialize, Serialize};

use invoicer_core::{DomainError, DomainResult, ValueObject};

/// A quantity or unit price accepted by the invoice.
///
/// Always finite and never negative: negative input is clamped to zero and
/// non-finite input (NaN, infinities) is rejected. Fractional values are kept
/// as-is (hours, kilograms, ...).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);
    pub const ONE: Amount = Amount(1.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "amount must be a finite number, got {value}"
            )));
        }
        // `<=` also folds -0.0 into +0.0 so it never prints as "-0.00".
        if value <= 0.0 {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    /// Parse text typed into a number input.
    ///
    /// Surrounding whitespace is ignored and blank input reads as zero, the
    /// way a cleared number field does. Anything that is not a finite decimal
    /// number is a validation error.
    pub fn parse_input(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("not a number: {trimmed:?}")))?;
        Self::new(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for Amount {}

impl TryFrom<f64> for Amount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Whole numbers are always valid amounts.
impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_positive_values() {
        assert_eq!(Amount::new(12.5).unwrap().get(), 12.5);
    }

    #[test]
    fn clamps_negative_values_to_zero() {
        assert_eq!(Amount::new(-3.0).unwrap(), Amount::ZERO);
        assert!(Amount::new(-0.0).unwrap().get().is_sign_positive());
    }

    #[test]
    fn rejects_non_finite_values() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Amount::new(v), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn parses_form_input() {
        assert_eq!(Amount::parse_input(" 150 ").unwrap().get(), 150.0);
        assert_eq!(Amount::parse_input("2.75").unwrap().get(), 2.75);
        assert_eq!(Amount::parse_input("").unwrap(), Amount::ZERO);
        assert_eq!(Amount::parse_input("   ").unwrap(), Amount::ZERO);
        assert!(Amount::parse_input("ten").is_err());
        assert!(Amount::parse_input("inf").is_err());
    }

    #[test]
    fn whole_numbers_convert_directly() {
        assert_eq!(Amount::from(150u32).get(), 150.0);
        assert_eq!(Amount::from(0u32), Amount::ZERO);
    }

    #[test]
    fn deserialization_runs_validation() {
        let ok: Amount = serde_json::from_str("4.5").unwrap();
        assert_eq!(ok.get(), 4.5);
        let clamped: Amount = serde_json::from_str("-1").unwrap();
        assert_eq!(clamped, Amount::ZERO);
    }
}
