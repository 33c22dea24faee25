//! Wire enums for the response envelope.
//!
//! Canonical status values of the envelope JSON contract.

use serde::{Deserialize, Serialize};

/// Status of a REST API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestResultStatus {
    /// The call completed; `results` carries its payload.
    Success,
    /// The call failed; `error` carries a human-readable message.
    Error,
}

impl RestResultStatus {
    pub fn is_success(self) -> bool {
        matches!(self, RestResultStatus::Success)
    }
}
