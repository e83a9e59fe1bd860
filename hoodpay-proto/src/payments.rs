//! Payment resources and the bodies of the payment endpoints.
//!
//! Covers both the merchant-side endpoints under `businesses/{businessId}/payments`
//! and the public hosted-checkout endpoints under `public/payments/hosted-page`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::helpers::{deserialize_id, serialize_amount, serialize_optional_amount};

/// A payment as returned by the API.
///
/// Only `id` is required. Everything else is optional because the
/// hosted-page and merchant endpoints return different subsets of fields.
/// Fields this type does not name are kept in [`Payment::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Amount in units of `currency`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_amount"
    )]
    pub amount: Option<f64>,

    /// ISO 4217 currency code, e.g. `"USD"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Payment status, e.g. `"PENDING"` or `"COMPLETED"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Hosted checkout URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Creation timestamp.
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp.
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Merchant note attached to the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Email the customer entered on the hosted page.
    #[serde(default, alias = "customerEmail", skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Payment method chosen on the hosted page.
    #[serde(default, alias = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Arbitrary metadata supplied at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The body returned by `GET businesses/{businessId}/payments`.
///
/// Depending on the API version the list is either a bare array or a paged
/// object, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentList {
    /// A bare array of payments.
    Items(Vec<Payment>),
    /// A page of payments with paging fields.
    Page(PaymentPage),
}

/// A page of payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPage {
    /// The payments on this page.
    pub data: Vec<Payment>,

    /// Paging fields such as `pageNumber`, `totalPages` or `hasNextPage`.
    #[serde(flatten)]
    pub paging: Map<String, Value>,
}

impl PaymentList {
    /// Returns the payments regardless of the list shape.
    #[must_use]
    pub fn items(&self) -> &[Payment] {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => &page.data,
        }
    }

    /// Consumes the list and returns the payments.
    #[must_use]
    pub fn into_items(self) -> Vec<Payment> {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => page.data,
        }
    }
}

/// Body of `POST businesses/{businessId}/payments`.
///
/// Optional fields that are `None` are omitted from the JSON body, so a
/// request built with [`CreatePaymentRequest::new`] alone serializes to
/// exactly `{"amount":...,"currency":...}`.
///
/// # Example
///
/// ```rust
/// use hoodpay_proto::CreatePaymentRequest;
///
/// let request = CreatePaymentRequest::new(1000.0, "USD")
///     .with_name("Pro plan")
///     .with_customer_email("buyer@example.com");
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["amount"], 1000);
/// assert_eq!(body["customerEmail"], "buyer@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Amount in units of `currency`.
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Product name shown on the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product description shown on the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Restricts the accepted methods, keyed by method family
    /// (e.g. `"crypto"` to a list of currencies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<BTreeMap<String, Vec<String>>>,

    /// Where the customer is sent after paying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// Where payment notifications for this payment are posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,

    /// Prefills the customer email on the checkout page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Customer IP address, used for fraud checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,

    /// Customer user agent, used for fraud checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_user_agent: Option<String>,

    /// Arbitrary metadata echoed back on the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreatePaymentRequest {
    /// Creates a request with only the required fields set.
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            name: None,
            description: None,
            payment_methods: None,
            redirect_url: None,
            notify_url: None,
            customer_email: None,
            customer_ip: None,
            customer_user_agent: None,
            metadata: None,
        }
    }

    /// Sets the product name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the product description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an accepted payment method family and its options.
    #[must_use]
    pub fn with_payment_method(
        mut self,
        family: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.payment_methods
            .get_or_insert_with(BTreeMap::new)
            .insert(family.into(), options.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the post-payment redirect URL.
    #[must_use]
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Sets the notification URL.
    #[must_use]
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = Some(url.into());
        self
    }

    /// Prefills the customer email.
    #[must_use]
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Sets the customer IP address.
    #[must_use]
    pub fn with_customer_ip(mut self, ip: impl Into<String>) -> Self {
        self.customer_ip = Some(ip.into());
        self
    }

    /// Sets the customer user agent.
    #[must_use]
    pub fn with_customer_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.customer_user_agent = Some(user_agent.into());
        self
    }

    /// Attaches metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of `PUT businesses/{businessId}/payments/{paymentId}/note`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    /// New note text.
    pub note: String,
}

/// Body of `POST public/payments/hosted-page/{paymentId}/select-payment-method`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectPaymentMethodRequest {
    /// Method identifier, e.g. `"BITCOIN"`.
    pub payment_method: String,
}

/// Body of `POST public/payments/hosted-page/{paymentId}/customer_email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerEmailRequest {
    /// Customer email address.
    pub email: String,
}
