//! Error types for the ZAP API client.
//!
//! # Design
//! Callers see exactly one error type, [`ClientError`]. Whatever went wrong
//! underneath (a network failure, a non-2xx status, a body that is not JSON)
//! is kept as the error's `source()` in the form of a [`TransportError`], and
//! any HTTP response that came back is exposed through
//! [`ClientError::response`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The failure underneath a [`ClientError`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP library could not complete the round-trip.
    #[error("{0}")]
    Network(#[from] ureq::Error),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// A default-format response body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The configured outbound proxy address could not be parsed.
    #[error("invalid proxy address {address:?}: {reason}")]
    InvalidProxy { address: String, reason: String },
}

/// Structured error body returned by ZAP's JSON endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// What the server sent back with a failed call, if anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    /// The response body, parsed as JSON when possible and otherwise kept as a
    /// JSON string.
    pub data: Option<Value>,
}

impl ErrorResponse {
    /// Decode `data` as a ZAP error body (`code`, `message`, `detail`).
    pub fn error_body(&self) -> Option<ErrorBody> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

/// The single error type surfaced by every client call.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
    response: ErrorResponse,
    #[source]
    cause: TransportError,
}

impl ClientError {
    /// Wrap `cause`, taking status and body from it when it carries a response.
    pub fn new(cause: TransportError) -> Self {
        let response = match &cause {
            TransportError::Status { status, body } => ErrorResponse {
                status: Some(*status),
                data: body_data(body),
            },
            _ => ErrorResponse::default(),
        };
        Self::with_response(cause, response)
    }

    /// Wrap `cause` with an explicit response.
    pub fn with_response(cause: TransportError, response: ErrorResponse) -> Self {
        Self {
            message: cause.to_string(),
            response,
            cause,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }

    pub fn status(&self) -> Option<u16> {
        self.response.status
    }

    pub fn cause(&self) -> &TransportError {
        &self.cause
    }

    pub fn into_cause(self) -> TransportError {
        self.cause
    }
}

impl From<TransportError> for ClientError {
    fn from(cause: TransportError) -> Self {
        ClientError::new(cause)
    }
}

fn body_data(body: &str) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}
