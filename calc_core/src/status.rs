//! Human-readable status phrases

use serde::{Deserialize, Serialize};

/// Status reported after each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Ready,
    Typing,
    Cleared,
    SignFlipped,
    Percent,
    OperatorSelected,
    OperatorUpdated,
    Result,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::Typing => "Typing",
            Status::Cleared => "Cleared",
            Status::SignFlipped => "Sign flipped",
            Status::Percent => "Percent",
            Status::OperatorSelected => "Operator selected",
            Status::OperatorUpdated => "Operator updated",
            Status::Result => "Result",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
