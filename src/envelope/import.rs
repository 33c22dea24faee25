//! Envelope import from JSON.
//!
//! Members omitted on the wire (`results` on error, `error` on success)
//! decode as absent.

/// Decode an envelope from JSON bytes.
pub fn from_json(bytes: &[u8]) -> crate::types::Result<super::RestResult> {
    Ok(serde_json::from_slice(bytes)?)
}
