//! CalculatorEngine
//!
//! Owns the [`CalcState`] and applies transitions one at a time. Arithmetic
//! failures never interrupt control flow: they land in the entry as the error
//! marker and are reported back through [`Outcome::Failed`].

use crate::{
    action::Action,
    entry::Entry,
    error::ArithmeticError,
    number::NumberFormat,
    operator::Operator,
    snapshot::CalculatorSnapshot,
    state::{CalcState, Transition},
    status::Status,
};
use serde::{Deserialize, Serialize};

/// Engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub format: NumberFormat,
    /// Cap on digits per entry; `None` leaves entries unbounded
    pub max_digits: Option<usize>,
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing observable changed
    Unchanged,
    /// Entry, history or status changed
    Changed,
    /// Arithmetic failed; the entry now holds the error marker
    Failed(ArithmeticError),
}

/// Calculator engine state machine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: CalcState,
    status: Status,
    config: EngineConfig,
    revision: u64,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: CalcState::Idle,
            status: Status::Ready,
            config,
            revision: 0,
        }
    }

    /// Applies an action and returns the outcome
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::Decimal => self.decimal(),
            Action::Clear => self.clear(),
            Action::Negate => self.negate(),
            Action::Percent => self.percent(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Evaluate => self.evaluate(),
        }
    }

    /// Types a digit. Anything other than `0-9` is ignored.
    pub fn digit(&mut self, d: char) -> Outcome {
        if !d.is_ascii_digit() {
            return Outcome::Unchanged;
        }
        let max_digits = self.config.max_digits;
        self.transition(|state| state.digit(d, max_digits))
    }

    pub fn decimal(&mut self) -> Outcome {
        self.transition(CalcState::decimal)
    }

    pub fn clear(&mut self) -> Outcome {
        self.transition(CalcState::clear)
    }

    pub fn negate(&mut self) -> Outcome {
        self.transition(CalcState::negate)
    }

    pub fn percent(&mut self) -> Outcome {
        self.transition(CalcState::percent)
    }

    pub fn choose_operator(&mut self, operator: Operator) -> Outcome {
        let format = self.config.format;
        self.transition(|state| state.choose_operator(operator, &format))
    }

    pub fn evaluate(&mut self) -> Outcome {
        let format = self.config.format;
        self.transition(|state| state.evaluate(&format))
    }

    // Accessors for rendering/testing

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn current_entry(&self) -> &str {
        self.state.current_entry()
    }

    pub fn pending_value(&self) -> Option<&str> {
        self.state.pending().map(|p| p.value.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending().map(|p| p.operator)
    }

    pub fn awaiting_new_entry(&self) -> bool {
        self.state.awaiting_new_entry()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bumped whenever entry, history or status changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_error(&self) -> bool {
        self.state.entry().is_some_and(Entry::is_error)
    }

    /// Unformatted history line: pending value and operator symbol
    pub fn history(&self) -> Option<String> {
        self.state
            .pending()
            .map(|p| format!("{} {}", p.value.as_str(), p.operator.symbol()))
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            current_entry: self.current_entry().to_string(),
            pending_value: self.pending_value().map(str::to_string),
            pending_operator: self.pending_operator(),
            awaiting_new_entry: self.awaiting_new_entry(),
            status: self.status,
        }
    }

    fn transition(&mut self, f: impl FnOnce(CalcState) -> Transition) -> Outcome {
        let previous = self.state.clone();
        let previous_status = self.status;

        let Transition {
            state,
            status,
            error,
        } = f(core::mem::take(&mut self.state));
        self.state = state;
        if let Some(status) = status {
            self.status = status;
        }

        let changed = self.state != previous || self.status != previous_status;
        if changed {
            self.revision += 1;
        }

        match error {
            Some(error) => Outcome::Failed(error),
            None if changed => Outcome::Changed,
            None => Outcome::Unchanged,
        }
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
