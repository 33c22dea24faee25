//! RestResult - the response envelope.
//!
//! A `RestResult` wraps the outcome of a REST API operation: a status tag
//! plus either a result payload or a human-readable error message, and the
//! instant the envelope was created. Envelopes are built once through the
//! factory constructors and never mutated afterwards, so the payload/error
//! pairing is fixed at construction and instances are safe to share across
//! threads.
//!
//! Fault envelopes carry an incident number in place of (production) or in
//! front of (non-production) the underlying fault text; the full text is
//! always written to the log so an operator can correlate the incident.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Environment;

pub mod enums;
pub mod export;
pub mod import;

pub use enums::*;

/// Response envelope returned by every API operation.
///
/// Members that are absent (`results` on error, `error` on success) are
/// omitted from the serialized form entirely, never emitted as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestResult {
    status: RestResultStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    /// Creation instant, Unix milliseconds.
    timestamp: i64,
}

impl RestResult {
    /// Create a success envelope wrapping `results`.
    ///
    /// A null payload is stored as absent, so the serialized form omits the
    /// `results` key. A payload that cannot be represented as a JSON value
    /// is likewise treated as absent; the conversion failure is logged.
    pub fn success(results: impl Serialize) -> Self {
        let results = match serde_json::to_value(results) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, "success payload is not representable as JSON");
                None
            }
        };

        Self {
            status: RestResultStatus::Success,
            results,
            error: None,
            timestamp: now_millis(),
        }
    }

    /// Create an error envelope carrying `message` verbatim.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: RestResultStatus::Error,
            results: None,
            error: Some(message.into()),
            timestamp: now_millis(),
        }
    }

    /// Create an error envelope from a caught fault.
    ///
    /// Resolves the process-wide environment mode (see
    /// [`Environment::current`]) and delegates to [`RestResult::error_from_with`].
    pub fn error_from(fault: &dyn std::error::Error) -> Self {
        Self::error_from_with(fault, Environment::current())
    }

    /// Create an error envelope from a caught fault under an explicit
    /// environment mode.
    ///
    /// Generates an incident number (current Unix time in milliseconds,
    /// best-effort uniqueness) and writes one ERROR-level log record with the
    /// full fault text. The returned envelope's `error` is the incident
    /// number followed by the fault text, except in production mode where
    /// the fault text is withheld and only `"Exception Number [<id>]"` is
    /// exposed. Masking applies to the envelope only, never to the log.
    pub fn error_from_with(fault: &dyn std::error::Error, env: Environment) -> Self {
        let incident = now_millis();
        let masked = format!("Exception Number [{incident}]");
        let full = format!("{masked}{fault}");

        tracing::error!(incident, fault = ?fault, "{full}");

        let message = if env.is_production() { masked } else { full };

        Self {
            status: RestResultStatus::Error,
            results: None,
            error: Some(message),
            timestamp: now_millis(),
        }
    }

    pub fn status(&self) -> RestResultStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn results(&self) -> Option<&Value> {
        self.results.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Creation instant, Unix milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
