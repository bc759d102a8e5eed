use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the kurssi workspace.
///
/// The analytics themselves never fail; every function degrades to a neutral
/// value on empty input. Errors only arise at the edges: decoding the provider
/// payload, validating a bundle the caller hands in, and checking configuration.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KurssiError {
    /// Issues with the supplied or decoded data (length mismatch, ordering, JSON shape).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Not enough samples for an analytic to be meaningful.
    ///
    /// Only reported as a warning; the analytic still returns its neutral value.
    #[error("insufficient data: {what}")]
    InsufficientData {
        /// Description of the degenerate analytic, e.g. "buy/sell over 1 day".
        what: String,
    },
}

impl KurssiError {
    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `InsufficientData` warning for the named analytic.
    pub fn insufficient(what: impl Into<String>) -> Self {
        Self::InsufficientData { what: what.into() }
    }

    /// Returns true if this error should stop processing.
    ///
    /// `InsufficientData` is informational and never aborts an analysis.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::InsufficientData { .. })
    }
}

impl From<serde_json::Error> for KurssiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}

impl From<chrono::ParseError> for KurssiError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}
