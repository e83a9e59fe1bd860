//! Client configuration.

use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT, HOODPAY_API_BASE_URL};

/// Configuration for [`ApiClient`](crate::ApiClient).
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use hoodpay::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://sandbox.example/v1")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url, "https://sandbox.example/v1/");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL. Always ends with `/`, so relative paths keep its prefix.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// built.
    pub http_client: Option<reqwest::Client>,

    /// Reject response bodies whose `result` code is present and not `100`.
    ///
    /// Off by default: only the HTTP status decides success.
    pub validate_result_code: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: HOODPAY_API_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            validate_result_code: false,
        }
    }
}

impl ClientConfig {
    /// Sets the base URL, appending a trailing `/` if missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim_end_matches('/').to_owned();
        base_url.push('/');
        self.base_url = base_url;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the request timeout in milliseconds. Zero keeps the default.
    #[must_use]
    pub const fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        if timeout_ms == 0 {
            return self;
        }
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Enables or disables result-code validation.
    #[must_use]
    pub const fn with_result_code_validation(mut self, enabled: bool) -> Self {
        self.validate_result_code = enabled;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .field("validate_result_code", &self.validate_result_code)
            .finish()
    }
}
