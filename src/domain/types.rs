//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-negative amounts, three-letter
//! currency codes) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Amount was negative or not a finite number.
    #[error("amount must be a finite, non-negative number")]
    InvalidAmount,
    /// Quantity was zero.
    #[error("quantity must be at least one")]
    ZeroQuantity,
    /// Currency code was not three ASCII letters.
    #[error("currency must be a three-letter code")]
    InvalidCurrency,
}

/// Monetary amount in the payload currency.
///
/// Whole values serialize as JSON integers so the webhook receives `5000`
/// rather than `5000.0`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Creates a new amount ensuring it is finite and non-negative.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidAmount)
        }
    }

    /// Returns the raw `f64` backing this amount.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Formats the amount with comma-separated thousands, e.g. `21,500`.
    ///
    /// Fractional parts are kept up to three digits with trailing zeros
    /// removed.
    pub fn grouped(self) -> String {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        let whole = rounded.trunc() as u64;
        let fraction = format!("{:.3}", rounded.fract());
        let fraction = fraction
            .trim_start_matches('0')
            .trim_start_matches('.')
            .trim_end_matches('0');

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if fraction.is_empty() {
            grouped
        } else {
            format!("{grouped}.{fraction}")
        }
    }
}

impl TryFrom<f64> for Amount {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 <= u64::MAX as f64 {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Number of units of a component, at least one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a new quantity ensuring it is at least one.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ZeroQuantity)
        }
    }

    /// Returns the raw `u32` backing this quantity.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Upper-cased ISO-4217 style currency code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validates a three-letter code and normalizes it to upper case.
    pub fn new<S: AsRef<str>>(code: S) -> Result<Self, TypeConstraintError> {
        let code = code.as_ref().trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(TypeConstraintError::InvalidCurrency)
        }
    }

    /// Borrow the code as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}
