//! Wire format types for the Hoodpay payments API.
//!
//! This crate defines the request and response bodies exchanged with
//! `https://api.hoodpay.io/v1/`. It only depends on `serde` and
//! `serde_json`, so it can be shared by clients, mocks and test fixtures
//! without pulling in an HTTP stack.
//!
//! # Modules
//!
//! - [`envelope`] — The `{ result, message, data }` wrapper around every response
//! - [`payments`] — Payments, payment lists and the payment mutation bodies
//! - [`webhooks`] — Webhook subscriptions and event type tags
//! - [`businesses`] — Businesses visible to the API key
//! - [`helpers`] — Serde helpers shared by the body types

pub mod businesses;
pub mod envelope;
pub mod helpers;
pub mod payments;
pub mod webhooks;

pub use businesses::Business;
pub use envelope::{ApiResponse, RESULT_OK};
pub use payments::{
    CreatePaymentRequest, CustomerEmailRequest, Payment, PaymentList, PaymentPage,
    SelectPaymentMethodRequest, UpdateNoteRequest,
};
pub use webhooks::{CreateWebhookRequest, WebhookConfig, WebhookEventType, WebhookSecret};

use serde::{Deserialize, Serialize};

/// Body sent with action endpoints that take no parameters.
///
/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyBody {}

/// Errors that can occur when parsing Hoodpay wire types.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The string is not a known webhook event type.
    #[error("unknown webhook event type: {0}")]
    UnknownEventType(String),
}
