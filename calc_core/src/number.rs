//! Arithmetic kernel and numeric re-encoding policy

use crate::error::ArithmeticError;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Fixed policy for turning computed values back into entry strings.
///
/// Values are rounded to `precision` fractional digits, trailing zeros and a
/// dangling point are trimmed, negative zero becomes `"0"`. Exponent notation
/// is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub precision: usize,
}

impl NumberFormat {
    pub const DEFAULT_PRECISION: usize = 10;

    pub const fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Encodes a finite value as an entry string
    pub fn encode(&self, value: f64) -> String {
        let mut text = format!("{:.*}", self.precision, value);
        if text.contains('.') {
            let len = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(len);
        }
        if text == "-0" {
            text = String::from("0");
        }
        text
    }

    /// Combines two entry strings with `op`.
    ///
    /// Operands must parse to finite numbers. A zero divisor and a non-finite
    /// result are reported as errors rather than encoded.
    pub fn compute(&self, a: &str, b: &str, op: Operator) -> Result<String, ArithmeticError> {
        let lhs = parse_operand(a)?;
        let rhs = parse_operand(b)?;

        if op == Operator::Divide && rhs == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let result = op.apply(lhs, rhs);
        if !result.is_finite() {
            return Err(ArithmeticError::NonFiniteResult);
        }

        Ok(self.encode(result))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}

/// Parses an entry string, accepting only finite values
pub fn parse_operand(text: &str) -> Result<f64, ArithmeticError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ArithmeticError::NonFiniteOperand(text.to_string())),
    }
}

/// Encodes a finite value with the shortest string that parses back to it.
///
/// Used for sign flips and percent, which must not lose precision.
/// Negative zero becomes `"0"`; exponent notation is never produced.
pub fn encode_exact(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    value.to_string()
}

/// [`NumberFormat::compute`] with the default format
pub fn compute(a: &str, b: &str, op: Operator) -> Result<String, ArithmeticError> {
    NumberFormat::default().compute(a, b, op)
}
