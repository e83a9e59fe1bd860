//! The response envelope returned by every Hoodpay endpoint.

use serde::{Deserialize, Serialize};

/// Result code the API uses for a successful call.
pub const RESULT_OK: i64 = 100;

/// Generic wrapper around a Hoodpay response body.
///
/// Most endpoints answer with `{ "data": ..., "message": ... }`; some older
/// ones also carry a numeric `result` code. All three fields are optional so
/// that any JSON object parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric result code, `100` on success when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,

    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The typed payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            result: None,
            message: None,
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Wraps a payload with no result code or message.
    #[must_use]
    pub const fn with_data(data: T) -> Self {
        Self {
            result: None,
            message: None,
            data: Some(data),
        }
    }

    /// Returns `true` if the result code is absent or equals [`RESULT_OK`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_none_or(|code| code == RESULT_OK)
    }

    /// Consumes the envelope and returns the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns a reference to the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
