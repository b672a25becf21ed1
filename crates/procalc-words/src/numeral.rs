//! Validated non-negative integers ready to be spelled out.
//!
//! The words converters take a digit string rather than a machine integer so
//! that amounts typed with Arabic-Indic digits, or larger than `u64`, can be
//! spelled out exactly. Signs, decimal points, and separators are rejected:
//! fractional amounts are split into whole units and sub-units by the caller
//! (see the money crate) before conversion.

use std::str::FromStr;

use num_traits::Float;
use procalc_core::errors::{Error, Result};
use procalc_core::utilities::normalize_digits;

/// Largest supported number of digits (up to the sextillion scale).
pub const MAX_DIGITS: usize = 24;

/// A non-negative integer held as ASCII decimal digits without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    digits: String,
}

impl Numeral {
    /// Parse a digit string. ASCII and Arabic-Indic (`٠`–`٩`) digits are
    /// accepted; surrounding whitespace is ignored.
    ///
    /// # Errors
    /// [`Error::InvalidNumeral`] for an empty string, any non-digit character
    /// (including `-` and `.`), or more than [`MAX_DIGITS`] significant digits.
    pub fn parse(s: &str) -> Result<Self> {
        let ascii = normalize_digits(s.trim());
        if ascii.is_empty() {
            return Err(Error::InvalidNumeral("empty input".into()));
        }
        if let Some(bad) = ascii.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::InvalidNumeral(format!(
                "'{s}' contains non-digit character '{bad}'"
            )));
        }
        let significant = ascii.trim_start_matches('0');
        Self::from_significant(if significant.is_empty() { "0" } else { significant })
    }

    /// Build from a real number that must be finite, non-negative, and whole.
    ///
    /// # Errors
    /// [`Error::InvalidNumeral`] for NaN, infinities, negative values,
    /// values with a fractional part, and values above the supported range.
    pub fn from_real<T: Float>(value: T) -> Result<Self> {
        let shown = value.to_f64().unwrap_or(f64::NAN);
        if !value.is_finite() {
            return Err(Error::InvalidNumeral(format!("{shown} is not finite")));
        }
        if value < T::zero() {
            return Err(Error::InvalidNumeral(format!("{shown} is negative")));
        }
        if value.fract() != T::zero() {
            return Err(Error::InvalidNumeral(format!(
                "{shown} has a fractional part"
            )));
        }
        let whole = value
            .to_u128()
            .ok_or_else(|| Error::InvalidNumeral(format!("{shown} is too large")))?;
        Numeral::try_from(whole)
    }

    fn from_significant(digits: &str) -> Result<Self> {
        if digits.len() > MAX_DIGITS {
            return Err(Error::InvalidNumeral(format!(
                "{} digits exceed the supported maximum of {MAX_DIGITS}",
                digits.len()
            )));
        }
        Ok(Self {
            digits: digits.to_owned(),
        })
    }

    /// The ASCII digits, without leading zeros (`"0"` for zero).
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Return `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl FromStr for Numeral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Numeral::parse(s)
    }
}

impl From<u64> for Numeral {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<u32> for Numeral {
    fn from(value: u32) -> Self {
        Numeral::from(value as u64)
    }
}

impl TryFrom<u128> for Numeral {
    type Error = Error;

    fn try_from(value: u128) -> Result<Self> {
        Numeral::from_significant(&value.to_string())
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes() {
        assert_eq!(Numeral::parse("٢٠٢٤").unwrap().digits(), "2024");
        assert_eq!(Numeral::parse(" 000120 ").unwrap().digits(), "120");
        assert!(Numeral::parse("000").unwrap().is_zero());
        assert!(Numeral::parse("٠").unwrap().is_zero());
    }

    #[test]
    fn parse_rejects() {
        for bad in ["", "  ", "-5", "+5", "12.5", "1,000", "abc", "١٢x"] {
            assert!(
                matches!(Numeral::parse(bad), Err(Error::InvalidNumeral(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(Numeral::parse(&"9".repeat(MAX_DIGITS)).is_ok());
        assert!(Numeral::parse(&"9".repeat(MAX_DIGITS + 1)).is_err());
    }

    #[test]
    fn from_real() {
        assert_eq!(Numeral::from_real(1500.0_f64).unwrap().digits(), "1500");
        assert!(Numeral::from_real(-0.0_f64).unwrap().is_zero());
        assert!(Numeral::from_real(-1.0_f64).is_err());
        assert!(Numeral::from_real(1.5_f32).is_err());
        assert!(Numeral::from_real(f64::NAN).is_err());
        assert!(Numeral::from_real(f64::INFINITY).is_err());
        assert!(Numeral::from_real(1e30_f64).is_err());
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(Numeral::from(42u32).to_string(), "42");
        assert_eq!(Numeral::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert!(Numeral::try_from(u128::MAX).is_err());
        assert_eq!(Numeral::parse(&"9".repeat(24)).unwrap().to_u64(), None);
    }
}
