//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum for the rest-results crate.
///
/// Envelope construction itself never fails; the only fallible surface is
/// JSON encoding/decoding in `envelope::export` and `envelope::import`.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
