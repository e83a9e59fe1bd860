//! Fixed values of the Hoodpay API.

use std::time::Duration;

/// Production API base URL. Endpoint paths are joined onto it.
pub const HOODPAY_API_BASE_URL: &str = "https://api.hoodpay.io/v1/";

/// Hosted checkout base URL. The payment id is appended to it.
pub const CHECKOUT_BASE_URL: &str = "https://checkout.hoodpay.io/";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// `Content-Type` sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/*+json";

/// Message used when a failure carries no usable description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Message used when a response carries a failing result code but no message.
pub const UNKNOWN_RESULT_MESSAGE: &str = "Unknown error";
