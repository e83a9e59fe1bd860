//! Request observers.
//!
//! A [`RequestObserver`] sees every request the [`Hoodpay`](crate::Hoodpay)
//! facade dispatches, at three points:
//!
//! - **Request**: after the path is rendered, before the transport is called
//! - **Response**: after a body was received
//! - **Failure**: after the transport or decoding failed
//!
//! Observers only watch. They cannot change a result or abort a call, and
//! the facade behaves the same whether or not one is installed. All methods
//! default to no-ops; implement only the ones you need.
//!
//! With the `telemetry` feature, [`TracingObserver`] logs these events
//! through `tracing`.

use reqwest::Method;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::Error;

/// What is being sent. Never contains the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// The operation.
    pub endpoint: Endpoint,
    /// HTTP verb.
    pub method: Method,
    /// Fully substituted path relative to the base URL.
    pub path: String,
}

/// Observes requests dispatched by the facade.
pub trait RequestObserver: Send + Sync {
    /// Called before the request is handed to the transport.
    fn on_request(&self, _info: &RequestInfo) {}

    /// Called with the parsed response body.
    fn on_response(&self, _info: &RequestInfo, _body: &Value) {}

    /// Called when the request or response decoding failed.
    fn on_failure(&self, _info: &RequestInfo, _error: &Error) {}
}

/// Observer that does nothing. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

/// Observer that logs through `tracing`.
///
/// Requests and responses are logged at `DEBUG`, failures at `ERROR`.
#[cfg(feature = "telemetry")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "telemetry")]
impl RequestObserver for TracingObserver {
    fn on_request(&self, info: &RequestInfo) {
        tracing::debug!(
            endpoint = %info.endpoint,
            method = %info.method,
            path = %info.path,
            "hoodpay.request"
        );
    }

    fn on_response(&self, info: &RequestInfo, body: &Value) {
        tracing::debug!(endpoint = %info.endpoint, body = %body, "hoodpay.response");
    }

    fn on_failure(&self, info: &RequestInfo, error: &Error) {
        tracing::error!(
            endpoint = %info.endpoint,
            method = %info.method,
            path = %info.path,
            error = %error,
            "hoodpay.request_failed"
        );
    }
}
