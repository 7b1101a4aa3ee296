//! Explicit calculator state machine
//!
//! Every transition consumes the current [`CalcState`] and returns the next
//! one. The flag view (pending value, pending operator, awaiting new entry)
//! is derived from the variant, so a pending value never exists without its
//! operator.

use crate::entry::Entry;
use crate::error::ArithmeticError;
use crate::number::NumberFormat;
use crate::operator::Operator;
use crate::status::Status;

/// Left operand and the operator waiting for its right operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub value: Entry,
    pub operator: Operator,
}

impl Pending {
    /// Combines the pending value with `rhs`
    fn fold(&self, rhs: &Entry, format: &NumberFormat) -> (Entry, Option<ArithmeticError>) {
        Entry::from_result(format.compute(self.value.as_str(), rhs.as_str(), self.operator))
    }
}

/// Calculator state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CalcState {
    /// Fresh state, entry shows `"0"`
    #[default]
    Idle,
    /// Typing the first operand
    Entering { entry: Entry },
    /// Operator chosen; the next digit starts the right operand
    OperatorArmed { pending: Pending, entry: Entry },
    /// Typing the right operand
    SecondOperand { pending: Pending, entry: Entry },
    /// Result shown; the next digit starts a fresh entry
    Result { entry: Entry },
}

/// Next state plus what the transition reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CalcState,
    /// `None` leaves the previous status in place
    pub status: Option<Status>,
    pub error: Option<ArithmeticError>,
}

impl Transition {
    fn to(state: CalcState, status: Status) -> Self {
        Self {
            state,
            status: Some(status),
            error: None,
        }
    }

    fn unchanged(state: CalcState) -> Self {
        Self {
            state,
            status: None,
            error: None,
        }
    }

    fn with_error(mut self, error: Option<ArithmeticError>) -> Self {
        self.error = error;
        self
    }
}

impl CalcState {
    /// Entry string as displayed
    pub fn current_entry(&self) -> &str {
        match self.entry() {
            Some(entry) => entry.as_str(),
            None => "0",
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            CalcState::Idle => None,
            CalcState::Entering { entry }
            | CalcState::OperatorArmed { entry, .. }
            | CalcState::SecondOperand { entry, .. }
            | CalcState::Result { entry } => Some(entry),
        }
    }

    fn entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            CalcState::Idle => None,
            CalcState::Entering { entry }
            | CalcState::OperatorArmed { entry, .. }
            | CalcState::SecondOperand { entry, .. }
            | CalcState::Result { entry } => Some(entry),
        }
    }

    pub fn pending(&self) -> Option<&Pending> {
        match self {
            CalcState::OperatorArmed { pending, .. } | CalcState::SecondOperand { pending, .. } => {
                Some(pending)
            }
            _ => None,
        }
    }

    /// True right after an operator or evaluate: the next digit starts a new entry
    pub fn awaiting_new_entry(&self) -> bool {
        matches!(
            self,
            CalcState::OperatorArmed { .. } | CalcState::Result { .. }
        )
    }

    pub fn digit(self, d: char, max_digits: Option<usize>) -> Transition {
        match self {
            CalcState::Idle | CalcState::Result { .. } => Transition::to(
                CalcState::Entering {
                    entry: Entry::digit(d),
                },
                Status::Typing,
            ),
            CalcState::OperatorArmed { pending, .. } => Transition::to(
                CalcState::SecondOperand {
                    pending,
                    entry: Entry::digit(d),
                },
                Status::Typing,
            ),
            mut state => {
                let pushed = state.entry_mut().is_some_and(|e| e.push_digit(d, max_digits));
                if pushed {
                    Transition::to(state, Status::Typing)
                } else {
                    Transition::unchanged(state)
                }
            }
        }
    }

    pub fn decimal(self) -> Transition {
        match self {
            CalcState::Idle | CalcState::Result { .. } => Transition::to(
                CalcState::Entering {
                    entry: Entry::fresh_decimal(),
                },
                Status::Typing,
            ),
            CalcState::OperatorArmed { pending, .. } => Transition::to(
                CalcState::SecondOperand {
                    pending,
                    entry: Entry::fresh_decimal(),
                },
                Status::Typing,
            ),
            mut state => {
                let pushed = state.entry_mut().is_some_and(Entry::push_decimal);
                if pushed {
                    Transition::to(state, Status::Typing)
                } else {
                    Transition::unchanged(state)
                }
            }
        }
    }

    pub fn clear(self) -> Transition {
        Transition::to(CalcState::Idle, Status::Cleared)
    }

    pub fn negate(self) -> Transition {
        self.update_entry(Status::SignFlipped, Entry::negate)
    }

    pub fn percent(self) -> Transition {
        match self {
            // 0 / 100 re-encodes to the same "0"
            CalcState::Idle => Transition::to(CalcState::Idle, Status::Percent),
            state => state.update_entry(Status::Percent, Entry::percent),
        }
    }

    pub fn choose_operator(self, operator: Operator, format: &NumberFormat) -> Transition {
        match self {
            CalcState::OperatorArmed { pending, entry } => Transition::to(
                CalcState::OperatorArmed {
                    pending: Pending {
                        operator,
                        ..pending
                    },
                    entry,
                },
                Status::OperatorUpdated,
            ),
            CalcState::Idle => Self::arm(Entry::zero(), operator),
            CalcState::Entering { entry } | CalcState::Result { entry } => {
                Self::arm(entry, operator)
            }
            CalcState::SecondOperand { pending, entry } => {
                let (folded, error) = pending.fold(&entry, format);
                Self::arm(folded, operator).with_error(error)
            }
        }
    }

    pub fn evaluate(self, format: &NumberFormat) -> Transition {
        match self {
            CalcState::OperatorArmed { pending, entry }
            | CalcState::SecondOperand { pending, entry } => {
                let (result, error) = pending.fold(&entry, format);
                Transition::to(CalcState::Result { entry: result }, Status::Result)
                    .with_error(error)
            }
            state => Transition::to(state, Status::Ready),
        }
    }

    fn arm(value: Entry, operator: Operator) -> Transition {
        Transition::to(
            CalcState::OperatorArmed {
                pending: Pending {
                    value: value.clone(),
                    operator,
                },
                entry: value,
            },
            Status::OperatorSelected,
        )
    }

    fn update_entry(mut self, status: Status, f: impl FnOnce(&mut Entry) -> bool) -> Transition {
        let updated = self.entry_mut().is_some_and(f);
        if updated {
            Transition::to(self, status)
        } else {
            Transition::unchanged(self)
        }
    }
}
