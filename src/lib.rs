//! # rest-results - REST API Response Envelope
//!
//! A status-tagged response envelope for REST APIs:
//! - [`RestResult::success`] wraps a result payload
//! - [`RestResult::error`] wraps a literal error message
//! - [`RestResult::error_from`] wraps a caught fault, generating an incident
//!   number and masking internal detail when the process runs in production
//!
//! Envelopes are immutable after construction and serialize to JSON with
//! absent members omitted:
//!
//! ```
//! use rest_results::RestResult;
//!
//! let ok = RestResult::success("Test Data");
//! let json = serde_json::to_string(&ok).unwrap();
//! assert!(json.contains(r#""status":"SUCCESS""#));
//! assert!(!json.contains("error"));
//! ```
//!
//! The production flag is resolved from the active deployment profile
//! (`spring.profiles.active`, falling back to `rest-results.env`); callers
//! that want deterministic masking inject the mode explicitly via
//! [`RestResult::error_from_with`].

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod envelope;
pub mod types;

// Internal utilities
pub mod observability;

pub use envelope::{RestResult, RestResultStatus};
pub use types::{Environment, Error, Result};
