//! Binary operators

use serde::{Deserialize, Serialize};

/// Binary operator awaiting its right operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Action name used by buttons and scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Symbol shown next to the pending value in the history line
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00d7}",
            Operator::Divide => "\u{00f7}",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operator::Add),
            "subtract" => Some(Operator::Subtract),
            "multiply" => Some(Operator::Multiply),
            "divide" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Keyboard mapping for operator keys
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two finite operands.
    ///
    /// Division by zero is not guarded here; see [`crate::number::compute`].
    pub(crate) fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_names() {
        assert_eq!(Operator::Add.as_str(), "add");
        assert_eq!(Operator::Subtract.as_str(), "subtract");
        assert_eq!(Operator::Multiply.as_str(), "multiply");
        assert_eq!(Operator::Divide.as_str(), "divide");
    }

    #[test]
    fn test_name_parsing_matches_as_str() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_name(op.as_str()), Some(op));
        }
        assert_eq!(Operator::from_name("modulo"), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Operator::from_key('+'), Some(Operator::Add));
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('x'), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }
}
