//! Calculator snapshot for deterministic replay testing

use crate::{Operator, Status};
use serde::{Deserialize, Serialize};

/// Flat view of the calculator state as seen by a display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub current_entry: String,
    pub pending_value: Option<String>,
    pub pending_operator: Option<Operator>,
    pub awaiting_new_entry: bool,
    pub status: Status,
}

impl CalculatorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in replay tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.current_entry.as_bytes());
        hasher.update([0u8]);
        if let Some(value) = &self.pending_value {
            hasher.update(value.as_bytes());
        }
        hasher.update([0u8]);
        hasher.update(
            self.pending_operator
                .map(|op| op.as_str())
                .unwrap_or("")
                .as_bytes(),
        );
        hasher.update([self.awaiting_new_entry as u8]);
        hasher.update(self.status.as_str().as_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
