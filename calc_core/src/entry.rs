//! The entry being typed or displayed

use crate::error::{ArithmeticError, ERROR_MARKER};
use crate::number::{encode_exact, parse_operand};
use serde::{Deserialize, Serialize};

/// Current entry: a numeric string or the error marker.
///
/// `Value` always holds a numeric string with at most one decimal point,
/// optionally signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Value(String),
    Error,
}

impl Entry {
    pub fn zero() -> Self {
        Entry::Value(String::from("0"))
    }

    /// Fresh entry holding a single digit
    pub fn digit(d: char) -> Self {
        Entry::Value(d.to_string())
    }

    /// Fresh entry started with the decimal point
    pub fn fresh_decimal() -> Self {
        Entry::Value(String::from("0."))
    }

    /// Wraps an arithmetic outcome, substituting the error marker on failure
    pub fn from_result(result: Result<String, ArithmeticError>) -> (Self, Option<ArithmeticError>) {
        match result {
            Ok(text) => (Entry::Value(text), None),
            Err(err) => (Entry::Error, Some(err)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Entry::Value(text) => text,
            Entry::Error => ERROR_MARKER,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Entry::Error)
    }

    /// True only for the literal default entry `"0"`
    pub fn is_zero(&self) -> bool {
        matches!(self, Entry::Value(text) if text == "0")
    }

    /// Finite numeric value of the entry
    pub fn value(&self) -> Option<f64> {
        match self {
            Entry::Value(text) => parse_operand(text).ok(),
            Entry::Error => None,
        }
    }

    /// Number of significant digits typed so far.
    ///
    /// Leading zeros of the integer part do not count, so `"0.12"` has two.
    pub fn digit_count(&self) -> usize {
        match self {
            Entry::Value(text) => {
                let unsigned = text.trim_start_matches('-');
                let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
                integer.trim_start_matches('0').len() + fraction.len()
            }
            Entry::Error => 0,
        }
    }

    /// Appends a digit, replacing a lone `"0"` or the error marker.
    ///
    /// Returns false when `max_digits` is already reached.
    pub fn push_digit(&mut self, d: char, max_digits: Option<usize>) -> bool {
        if self.is_zero() || self.is_error() {
            *self = Entry::digit(d);
            return true;
        }

        if let Some(max) = max_digits {
            if self.digit_count() >= max {
                return false;
            }
        }

        if let Entry::Value(text) = self {
            text.push(d);
        }
        true
    }

    /// Appends the decimal point unless one is already present.
    ///
    /// On the error marker this starts a fresh `"0."` entry.
    pub fn push_decimal(&mut self) -> bool {
        match self {
            Entry::Error => {
                *self = Entry::fresh_decimal();
                true
            }
            Entry::Value(text) if !text.contains('.') => {
                text.push('.');
                true
            }
            Entry::Value(_) => false,
        }
    }

    /// Flips the sign through an exact numeric round trip.
    /// No-op on `"0"` and on the error marker.
    pub fn negate(&mut self) -> bool {
        if self.is_zero() {
            return false;
        }
        match self.value() {
            Some(value) => {
                *self = Entry::Value(encode_exact(value * -1.0));
                true
            }
            None => false,
        }
    }

    /// Divides the value by 100. No-op on the error marker.
    pub fn percent(&mut self) -> bool {
        match self.value() {
            Some(value) => {
                *self = Entry::Value(encode_exact(value / 100.0));
                true
            }
            None => false,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}
