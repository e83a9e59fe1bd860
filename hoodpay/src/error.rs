//! Error types for the Hoodpay client.
//!
//! Every transport-level failure collapses into [`Error::RequestFailure`],
//! which carries only a human-readable message. Callers that need to tell
//! a 404 from a timeout have to inspect that message.

use reqwest::{Method, StatusCode};
use url::Url;

use crate::constants::UNKNOWN_ERROR_MESSAGE;
use crate::endpoint::PathError;

/// Errors returned by the Hoodpay client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request failed: connection error, timeout, non-2xx status,
    /// unreadable body, malformed JSON or an unexpected response shape.
    #[error("{message}")]
    RequestFailure {
        /// Human-readable description of the failure.
        message: String,
    },

    /// A path template still had an unresolved placeholder. Nothing was sent.
    #[error("invalid request path: {0}")]
    InvalidPath(#[from] PathError),

    /// The client could not be constructed.
    #[error("invalid client configuration: {context}: {message}")]
    Config {
        /// What was being configured.
        context: &'static str,
        /// Description of the underlying failure.
        message: String,
    },
}

impl Error {
    /// Builds a [`Error::RequestFailure`], falling back to
    /// [`UNKNOWN_ERROR_MESSAGE`] when `message` is blank.
    pub fn request_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            message
        };
        Self::RequestFailure { message }
    }

    /// Builds the failure reported for a non-2xx response.
    ///
    /// The status and body are folded into the message and not kept.
    pub(crate) fn http_status(method: &Method, url: &Url, status: StatusCode) -> Self {
        let code = status.as_u16();
        let status = match status.canonical_reason() {
            Some(reason) => format!("{code} {reason}"),
            None => code.to_string(),
        };
        Self::request_failure(format!(
            "Request failed with status code {status}: {method} {url}"
        ))
    }

    pub(crate) fn config(context: &'static str, source: impl std::fmt::Display) -> Self {
        Self::Config {
            context,
            message: source.to_string(),
        }
    }

    /// Returns `true` for [`Error::RequestFailure`].
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, Self::RequestFailure { .. })
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RequestFailure { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::request_failure(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::request_failure(err.to_string())
    }
}
