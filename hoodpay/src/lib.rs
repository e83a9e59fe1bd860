#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed async client for the [Hoodpay](https://hoodpay.io) payments API.
//!
//! The crate maps each API operation onto its REST path, attaches bearer
//! authentication, and turns JSON bodies into the types of
//! [`hoodpay_proto`]. It does not retry, cache, rate limit, or verify
//! incoming webhook deliveries.
//!
//! ```no_run
//! use hoodpay::{Hoodpay, WebhookEventType};
//!
//! # async fn run() -> Result<(), hoodpay::Error> {
//! let hoodpay = Hoodpay::new("your-api-key", "your-business-id")?;
//! let _payments = hoodpay.get_payments().await?;
//! hoodpay
//!     .create_webhook(
//!         "https://shop.example/hooks/hoodpay",
//!         "order updates",
//!         [WebhookEventType::PaymentCompleted],
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] — The [`Hoodpay`] facade, one method per operation
//! - [`transport`] — [`ApiClient`] and the [`Transport`] seam
//! - [`endpoint`] — The endpoint table and path rendering
//! - [`config`] — [`ClientConfig`]
//! - [`hooks`] — Request observers
//! - [`constants`] — Base URLs, default timeout, header values
//! - [`error`] — The [`Error`] type
//!
//! # Feature Flags
//!
//! - `telemetry` — Adds `tracing` spans around each request and the
//!   [`TracingObserver`](hooks::TracingObserver)

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod hooks;
pub mod transport;

pub use client::{Hoodpay, checkout_url};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, EndpointGroup, PathError, PathParams};
pub use error::Error;
pub use hooks::{NoopObserver, RequestInfo, RequestObserver};
pub use transport::{ApiClient, Transport};

#[cfg(feature = "telemetry")]
pub use hooks::TracingObserver;

pub use hoodpay_proto::{
    ApiResponse, Business, CreatePaymentRequest, CreateWebhookRequest, Payment, PaymentList,
    WebhookConfig, WebhookEventType, WebhookSecret,
};
