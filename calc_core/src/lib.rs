//! # Calculator Core
//!
//! Deterministic state machine for a four-function calculator.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same action trace => same calculator state
//! - **Errors are data**: Division by zero and non-finite values become the
//!   error marker in the entry, never a panic or an early return
//! - **Left to right**: Each new operator folds the pending computation,
//!   there is no operator precedence
//! - **No I/O**: Hosts decide rendering, grouping and logging
//!
//! ## Design
//!
//! The core provides:
//! - CalculatorEngine: Owns the state and applies actions
//! - CalcState: Explicit tagged state with pure transition functions
//! - Outcome: Structured result of each action
//! - CalculatorSnapshot: Flat state view for display and replay testing
//! - Action: Platform-independent input, with keyboard and button mappings

pub mod action;
pub mod engine;
pub mod entry;
pub mod error;
pub mod number;
pub mod operator;
pub mod snapshot;
pub mod state;
pub mod status;

pub use action::Action;
pub use engine::{CalculatorEngine, EngineConfig, Outcome};
pub use entry::Entry;
pub use error::{ArithmeticError, ERROR_MARKER};
pub use number::{compute, NumberFormat};
pub use operator::Operator;
pub use snapshot::CalculatorSnapshot;
pub use state::{CalcState, Pending, Transition};
pub use status::Status;
