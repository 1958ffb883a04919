//! Error types for the Bitstamp client library.
//!
//! Exchange-side failures (a decoded body carrying an `error` member) are not
//! errors at this level. They are data, surfaced as
//! [`ResultEnvelope::Error`](crate::types::ResultEnvelope::Error) by the
//! convenience operations and passed through untouched by the raw accessors.

use thiserror::Error;

/// The main error type for all Bitstamp client operations.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// Invalid configuration or a missing required parameter.
    ///
    /// Raised before any network attempt.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A private endpoint was called on a client built without credentials.
    #[error("Missing credentials: API key, secret and client id required for private endpoints")]
    MissingCredentials,

    /// Dispatch was requested with a verb other than GET or POST.
    #[error("Unsupported HTTP method \"{0}\"")]
    UnsupportedMethod(String),

    /// The call failed in a way that is likely to succeed if repeated.
    ///
    /// The fixed backoff has already elapsed when this is returned.
    #[error("Transient failure, retry advised: {0}")]
    Transient(TransientFailure),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The response decoded but lacked the shape an operation needs.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The operation has no counterpart on the exchange.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl BitstampError {
    /// Whether the caller may reasonably repeat the call.
    pub fn is_transient(&self) -> bool {
        matches!(self, BitstampError::Transient(_))
    }

    /// The transient failure details, if this is one.
    pub fn as_transient(&self) -> Option<&TransientFailure> {
        match self {
            BitstampError::Transient(failure) => Some(failure),
            _ => None,
        }
    }
}

/// What went wrong on a transient failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientKind {
    /// No response was received (connect error, timeout, broken body).
    Transport,
    /// A response arrived but its body is not valid JSON.
    Decode,
}

impl std::fmt::Display for TransientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransientKind::Transport => write!(f, "transport"),
            TransientKind::Decode => write!(f, "decode"),
        }
    }
}

/// Retry-advised sentinel returned by a single dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientFailure {
    /// Failure classification.
    pub kind: TransientKind,
    /// Human-readable cause.
    pub message: String,
}

impl TransientFailure {
    /// Create a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: TransientKind::Transport,
            message: message.into(),
        }
    }

    /// Create a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: TransientKind::Decode,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransientFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failure: {}", self.kind, self.message)
    }
}

impl From<TransientFailure> for BitstampError {
    fn from(failure: TransientFailure) -> Self {
        BitstampError::Transient(failure)
    }
}
