//! Arithmetic error kinds

use thiserror::Error;

/// Marker rendered in place of a value when arithmetic fails
pub const ERROR_MARKER: &str = "Error";

/// The single error family the engine can produce.
///
/// Never surfaced as a fault: the engine folds it into [`crate::Entry::Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Operand is not a finite number: {0}")]
    NonFiniteOperand(String),

    #[error("Result is not a finite number")]
    NonFiniteResult,
}
