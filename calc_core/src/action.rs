//! Input actions and their keyboard / button mappings

use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// A single engine transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Digit(char),
    Decimal,
    Clear,
    Negate,
    Percent,
    Operator(Operator),
    Evaluate,
}

impl Action {
    /// Keyboard mapping: digits, `.`, `%`, `=` or Enter, operator keys, Escape
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Action::Digit(ch)),
            '.' => Some(Action::Decimal),
            '%' => Some(Action::Percent),
            '=' | '\n' | '\r' => Some(Action::Evaluate),
            '\u{1b}' => Some(Action::Clear),
            _ => Operator::from_key(ch).map(Action::Operator),
        }
    }

    /// Button mapping: `name` is the button's action, `label` its caption.
    ///
    /// Digit buttons carry their digit in the label.
    pub fn from_button(name: &str, label: &str) -> Option<Self> {
        match name {
            "digit" => {
                let mut chars = label.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Some(Action::Digit(d)),
                    _ => None,
                }
            }
            "decimal" => Some(Action::Decimal),
            "clear" => Some(Action::Clear),
            "sign" => Some(Action::Negate),
            "percent" => Some(Action::Percent),
            "equals" => Some(Action::Evaluate),
            other => Operator::from_name(other).map(Action::Operator),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Digit(_) => "digit",
            Action::Decimal => "decimal",
            Action::Clear => "clear",
            Action::Negate => "sign",
            Action::Percent => "percent",
            Action::Operator(op) => op.as_str(),
            Action::Evaluate => "equals",
        }
    }
}
