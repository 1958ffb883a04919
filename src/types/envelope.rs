//! The uniform `{result, data}` envelope returned by convenience operations.
//!
//! Bitstamp reports a logical failure by including an `error` member in an
//! otherwise ordinary JSON body, often with HTTP 200. The normalizer checks
//! for it once, here, so callers branch on a tagged union instead of probing
//! response maps themselves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BitstampError;

/// Normalized result of a convenience operation.
///
/// Serializes as `{"result": "success", "data": ...}` or
/// `{"result": "error", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", content = "data", rename_all = "lowercase")]
pub enum ResultEnvelope<T = Value> {
    /// The exchange accepted the call.
    Success(T),
    /// The exchange reported an error; carries its message as sent.
    Error(Value),
}

impl<T> ResultEnvelope<T> {
    /// Whether this is a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, ResultEnvelope::Success(_))
    }

    /// Whether this is an error envelope.
    pub fn is_error(&self) -> bool {
        matches!(self, ResultEnvelope::Error(_))
    }

    /// The success payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ResultEnvelope::Success(data) => Some(data),
            ResultEnvelope::Error(_) => None,
        }
    }

    /// The exchange error message, if any.
    pub fn error(&self) -> Option<&Value> {
        match self {
            ResultEnvelope::Success(_) => None,
            ResultEnvelope::Error(message) => Some(message),
        }
    }

    /// Transform the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResultEnvelope<U> {
        match self {
            ResultEnvelope::Success(data) => ResultEnvelope::Success(f(data)),
            ResultEnvelope::Error(message) => ResultEnvelope::Error(message),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, Value> {
        match self {
            ResultEnvelope::Success(data) => Ok(data),
            ResultEnvelope::Error(message) => Err(message),
        }
    }
}

/// The exchange error carried by a raw response, if it has one.
///
/// Only a non-null top-level `error` member of an object counts.
pub fn exchange_error(raw: &Value) -> Option<&Value> {
    raw.as_object()?.get("error").filter(|e| !e.is_null())
}

/// Wrap a raw response, passing the body through as the success payload.
pub fn wrap(raw: Value) -> ResultEnvelope {
    match exchange_error(&raw) {
        Some(error) => ResultEnvelope::Error(error.clone()),
        None => ResultEnvelope::Success(raw),
    }
}

/// Wrap a raw response, deriving the success payload with `transform`.
///
/// `transform` only runs when the response carries no exchange error.
pub fn wrap_with<T, F>(raw: Value, transform: F) -> Result<ResultEnvelope<T>, BitstampError>
where
    F: FnOnce(Value) -> Result<T, BitstampError>,
{
    match exchange_error(&raw) {
        Some(error) => Ok(ResultEnvelope::Error(error.clone())),
        None => transform(raw).map(ResultEnvelope::Success),
    }
}

/// Deserialize a raw response into the shape an operation expects.
pub fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, BitstampError> {
    serde_json::from_value(raw.clone()).map_err(|e| {
        BitstampError::InvalidResponse(format!("Unexpected response shape: {}. Body: {}", e, raw))
    })
}
