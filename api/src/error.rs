//! Response validation at the request boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is decoded into the record type its endpoint promises.
//! Anything else becomes an [`ApiError`] for the call site to render once as
//! an inline message; nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, TLS, connection reset, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The body did not match the record type for this endpoint.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    /// A request body could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),
    /// No transport exists in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 401/403, where the token was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|v| match v.get("message") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        _ => None,
    });
    message.unwrap_or_else(|| body.trim().to_owned())
}

/// Check `status` and decode `body` as `T`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and
/// [`ApiError::UnexpectedShape`] when the body is not a `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status { status, message: error_message(body) });
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, expected = std::any::type_name::<T>(), "rejecting response");
        ApiError::UnexpectedShape(e.to_string())
    })
}

/// Check `status` for endpoints whose body is ignored (deletes, writes).
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses.
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, message: error_message(body) })
    }
}
