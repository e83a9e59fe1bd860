//! The HTTP transport behind [`Hoodpay`](crate::Hoodpay).
//!
//! [`ApiClient`] is the single point of outbound communication. It owns the
//! base URL, the timeout and the bearer token, performs one HTTP call per
//! request and turns every failure into [`Error::RequestFailure`].
//!
//! ## Error Handling
//!
//! Connection errors, timeouts, non-2xx statuses, unreadable bodies and
//! malformed JSON are all reported as [`Error::RequestFailure`] with a
//! message. The status code and response body are not preserved.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::constants::{CONTENT_TYPE_JSON, UNKNOWN_RESULT_MESSAGE};
use crate::error::Error;
use hoodpay_proto::RESULT_OK;

/// Sends one request to the API and returns the parsed JSON body.
///
/// [`ApiClient`] is the production implementation. Anything else (a
/// recording mock, a proxy, a replay fixture) can be plugged into
/// [`Hoodpay::with_transport`](crate::Hoodpay::with_transport).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` (if any) to `path`, relative to the API base URL.
    ///
    /// `path` must already be fully substituted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] for any transport failure.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, Error>;
}

/// `reqwest`-based Hoodpay API client.
///
/// Every request carries `Authorization: Bearer <api key>` and
/// `Content-Type: application/*+json`. Nothing is retried or cached.
#[derive(Clone)]
pub struct ApiClient {
    /// API base URL, ending with `/`.
    base_url: Url,
    /// Shared reqwest client.
    client: Client,
    /// Pre-built `Bearer <key>` header, marked sensitive.
    authorization: HeaderValue,
    /// Per-request timeout.
    timeout: Duration,
    /// Whether to reject bodies with a failing `result` code.
    validate_result_code: bool,
}

impl ApiClient {
    /// Creates a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is not a valid header value or
    /// the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL does not parse, the key is
    /// not a valid header value or the HTTP client cannot be built.
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self, Error> {
        let mut normalized = config.base_url.trim_end_matches('/').to_owned();
        normalized.push('/');
        let base_url =
            Url::parse(&normalized).map_err(|e| Error::config("Failed to parse base url", e))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(
                "Failed to parse base url",
                format!("{base_url} cannot be used as a base"),
            ));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| Error::config("Invalid API key", e))?;
        authorization.set_sensitive(true);

        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| Error::config("Failed to build HTTP client", e))?,
        };

        Ok(Self {
            base_url,
            client,
            authorization,
            timeout: config.timeout,
            validate_result_code: config.validate_result_code,
        })
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` if result-code validation is enabled.
    #[must_use]
    pub const fn validates_result_code(&self) -> bool {
        self.validate_result_code
    }

    /// Resolves `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the joined URL is invalid.
    pub fn url_for(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|e| Error::request_failure(format!("Invalid request URL {path:?}: {e}")))
    }

    /// Sends a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] on transport failure or if the body
    /// does not match `R`.
    pub async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        decode(self.send(Method::GET, path, None).await?)
    }

    /// Sends a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] on transport failure or if the body
    /// does not match `R`.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::POST, path, Some(body)).await?)
    }

    /// Sends a `PUT` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] on transport failure or if the body
    /// does not match `R`.
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::PUT, path, Some(body)).await?)
    }

    /// Sends a `DELETE` request.
    ///
    /// An empty response body decodes as JSON `null`, so `R = ()` works for
    /// endpoints that answer with no content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] on transport failure or if the body
    /// does not match `R`.
    pub async fn delete<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        decode(self.send(Method::DELETE, path, None).await?)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, Error> {
        let url = self.url_for(path)?;
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))
            .timeout(self.timeout);
        // `.json()` would force `application/json`.
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(&method, &url, status));
        }

        let bytes = response.bytes().await?;
        let value = parse_body(&bytes)?;
        if self.validate_result_code {
            check_result_code(&value)?;
        }
        Ok(value)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("validate_result_code", &self.validate_result_code)
            .finish_non_exhaustive()
    }
}

/// Parses a response body, treating an empty body as `null`.
fn parse_body(bytes: &[u8]) -> Result<Value, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Rejects a body whose `result` code is present and not [`RESULT_OK`].
fn check_result_code(value: &Value) -> Result<(), Error> {
    match value.get("result").and_then(Value::as_i64) {
        Some(code) if code != RESULT_OK => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(UNKNOWN_RESULT_MESSAGE);
            Err(Error::request_failure(message))
        }
        _ => Ok(()),
    }
}

/// Converts a parsed body into the caller's type.
pub(crate) fn decode<R>(value: Value) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    serde_json::from_value(value)
        .map_err(|e| Error::request_failure(format!("Unexpected response body: {e}")))
}
