//! The endpoint table.
//!
//! Each public operation of [`Hoodpay`](crate::Hoodpay) maps to exactly one
//! [`Endpoint`] variant, which fixes its path template and HTTP verb. The
//! table is a closed enum, so adding an operation without a template or a
//! verb does not compile.

use std::fmt;

use reqwest::Method;

/// Placeholder for the business bound at construction.
pub const BUSINESS_ID: &str = "businessId";
/// Placeholder for a payment identifier.
pub const PAYMENT_ID: &str = "paymentId";
/// Placeholder for a webhook identifier.
pub const WEBHOOK_ID: &str = "webhookId";

/// API area an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointGroup {
    /// Merchant-side payment endpoints.
    Payments,
    /// Public hosted-checkout endpoints.
    LivePayments,
    /// Webhook subscription endpoints.
    Webhooks,
    /// Dashboard business listing.
    Businesses,
}

/// A Hoodpay API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET businesses/{businessId}/payments`
    GetPayments,
    /// `POST businesses/{businessId}/payments`
    CreatePayment,
    /// `GET businesses/{businessId}/payments/{paymentId}`
    GetPayment,
    /// `PUT businesses/{businessId}/payments/{paymentId}/note`
    UpdatePaymentNote,
    /// `GET public/payments/hosted-page/{paymentId}`
    GetLivePayment,
    /// `POST public/payments/hosted-page/{paymentId}/select-payment-method`
    SelectPaymentMethod,
    /// `POST public/payments/hosted-page/{paymentId}/customer_email`
    UpdateCustomerEmail,
    /// `POST public/payments/hosted-page/{paymentId}/cancel`
    CancelPayment,
    /// `GET dash/businesses/{businessId}/settings/developer/webhooks`
    GetWebhooks,
    /// `POST dash/businesses/{businessId}/settings/developer/webhooks`
    CreateWebhook,
    /// `POST dash/businesses/{businessId}/settings/developer/webhooks/reset-secret`
    ResetWebhookSecret,
    /// `DELETE dash/businesses/{businessId}/settings/developer/webhooks/{webhookId}`
    DeleteWebhook,
    /// `GET dash/businesses`
    GetBusinesses,
}

impl Endpoint {
    /// Every endpoint.
    pub const ALL: [Self; 13] = [
        Self::GetPayments,
        Self::CreatePayment,
        Self::GetPayment,
        Self::UpdatePaymentNote,
        Self::GetLivePayment,
        Self::SelectPaymentMethod,
        Self::UpdateCustomerEmail,
        Self::CancelPayment,
        Self::GetWebhooks,
        Self::CreateWebhook,
        Self::ResetWebhookSecret,
        Self::DeleteWebhook,
        Self::GetBusinesses,
    ];

    /// Path template relative to the API base URL.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::GetPayments | Self::CreatePayment => "businesses/{businessId}/payments",
            Self::GetPayment => "businesses/{businessId}/payments/{paymentId}",
            Self::UpdatePaymentNote => "businesses/{businessId}/payments/{paymentId}/note",
            Self::GetLivePayment => "public/payments/hosted-page/{paymentId}",
            Self::SelectPaymentMethod => {
                "public/payments/hosted-page/{paymentId}/select-payment-method"
            }
            Self::UpdateCustomerEmail => "public/payments/hosted-page/{paymentId}/customer_email",
            Self::CancelPayment => "public/payments/hosted-page/{paymentId}/cancel",
            Self::GetWebhooks | Self::CreateWebhook => {
                "dash/businesses/{businessId}/settings/developer/webhooks"
            }
            Self::ResetWebhookSecret => {
                "dash/businesses/{businessId}/settings/developer/webhooks/reset-secret"
            }
            Self::DeleteWebhook => {
                "dash/businesses/{businessId}/settings/developer/webhooks/{webhookId}"
            }
            Self::GetBusinesses => "dash/businesses",
        }
    }

    /// HTTP verb used by this endpoint.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::GetPayments
            | Self::GetPayment
            | Self::GetLivePayment
            | Self::GetWebhooks
            | Self::GetBusinesses => Method::GET,
            Self::CreatePayment
            | Self::SelectPaymentMethod
            | Self::UpdateCustomerEmail
            | Self::CancelPayment
            | Self::CreateWebhook
            | Self::ResetWebhookSecret => Method::POST,
            Self::UpdatePaymentNote => Method::PUT,
            Self::DeleteWebhook => Method::DELETE,
        }
    }

    /// API area of this endpoint.
    #[must_use]
    pub const fn group(self) -> EndpointGroup {
        match self {
            Self::GetPayments | Self::CreatePayment | Self::GetPayment | Self::UpdatePaymentNote => {
                EndpointGroup::Payments
            }
            Self::GetLivePayment
            | Self::SelectPaymentMethod
            | Self::UpdateCustomerEmail
            | Self::CancelPayment => EndpointGroup::LivePayments,
            Self::GetWebhooks
            | Self::CreateWebhook
            | Self::ResetWebhookSecret
            | Self::DeleteWebhook => EndpointGroup::Webhooks,
            Self::GetBusinesses => EndpointGroup::Businesses,
        }
    }

    /// Stable operation name, used in logs and spans.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetPayments => "get_payments",
            Self::CreatePayment => "create_payment",
            Self::GetPayment => "get_payment",
            Self::UpdatePaymentNote => "update_payment_note",
            Self::GetLivePayment => "get_live_payment",
            Self::SelectPaymentMethod => "select_payment_method",
            Self::UpdateCustomerEmail => "update_customer_email",
            Self::CancelPayment => "cancel_payment",
            Self::GetWebhooks => "get_webhooks",
            Self::CreateWebhook => "create_webhook",
            Self::ResetWebhookSecret => "reset_webhook_secret",
            Self::DeleteWebhook => "delete_webhook",
            Self::GetBusinesses => "get_businesses",
        }
    }

    /// Placeholder names in template order, without braces.
    pub fn placeholders(self) -> impl Iterator<Item = &'static str> {
        self.template()
            .split('{')
            .skip(1)
            .filter_map(|chunk| chunk.split_once('}').map(|(name, _)| name))
    }

    /// Substitutes every placeholder of the template.
    ///
    /// The template is scanned once and each `{name}` token is replaced by
    /// the matching value from `params`, percent-encoded as a single path
    /// segment. An identifier containing `/`, `?`, `#` or braces therefore
    /// stays inside its own segment and cannot reach another endpoint or
    /// inject another placeholder. Values the template does not use are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if a placeholder has no value, its value is
    /// empty, `.` or `..`, or it is not one of the known placeholder names.
    /// The path must not be sent in that case.
    pub fn render(self, params: &PathParams<'_>) -> Result<String, PathError> {
        let template = self.template();
        let mut path = String::with_capacity(template.len() + 32);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some((name, tail)) = after.split_once('}') else {
                return Err(PathError::Malformed { endpoint: self });
            };
            let value = params.value(name).map_err(|()| PathError::Unknown {
                endpoint: self,
                placeholder: name,
            })?;
            let value = value.ok_or(PathError::Unresolved {
                endpoint: self,
                placeholder: name,
            })?;
            if matches!(value, "." | "..") {
                return Err(PathError::DotSegment {
                    endpoint: self,
                    placeholder: name,
                });
            }
            path.push_str(&urlencoding::encode(value));
            rest = tail;
        }
        path.push_str(rest);
        Ok(path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values available for placeholder substitution.
#[derive(Debug, Clone, Copy)]
pub struct PathParams<'a> {
    /// Always present; bound at client construction.
    pub business_id: &'a str,
    /// Payment identifier, if the operation takes one.
    pub payment_id: Option<&'a str>,
    /// Webhook identifier, if the operation takes one.
    pub webhook_id: Option<&'a str>,
}

impl<'a> PathParams<'a> {
    /// Parameters with only the business id set.
    #[must_use]
    pub const fn new(business_id: &'a str) -> Self {
        Self {
            business_id,
            payment_id: None,
            webhook_id: None,
        }
    }

    /// Sets the payment id.
    #[must_use]
    pub const fn with_payment(mut self, payment_id: &'a str) -> Self {
        self.payment_id = Some(payment_id);
        self
    }

    /// Sets the webhook id.
    #[must_use]
    pub const fn with_webhook(mut self, webhook_id: &'a str) -> Self {
        self.webhook_id = Some(webhook_id);
        self
    }

    /// `Err(())` for an unknown placeholder, `Ok(None)` for a known but
    /// unset or empty one.
    fn value(&self, placeholder: &str) -> Result<Option<&'a str>, ()> {
        let value = match placeholder {
            BUSINESS_ID => Some(self.business_id),
            PAYMENT_ID => self.payment_id,
            WEBHOOK_ID => self.webhook_id,
            _ => return Err(()),
        };
        Ok(value.filter(|value| !value.is_empty()))
    }
}

/// A path template could not be fully substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A known placeholder had no value.
    #[error("{endpoint}: no value for placeholder {{{placeholder}}}")]
    Unresolved {
        /// Endpoint being rendered.
        endpoint: Endpoint,
        /// Placeholder name without braces.
        placeholder: &'static str,
    },

    /// The template names a placeholder that cannot be supplied.
    #[error("{endpoint}: unknown placeholder {{{placeholder}}}")]
    Unknown {
        /// Endpoint being rendered.
        endpoint: Endpoint,
        /// Placeholder name without braces.
        placeholder: &'static str,
    },

    /// The value is `.` or `..`, which URL resolution would collapse into
    /// a parent path.
    #[error("{endpoint}: placeholder {{{placeholder}}} cannot be a dot segment")]
    DotSegment {
        /// Endpoint being rendered.
        endpoint: Endpoint,
        /// Placeholder name without braces.
        placeholder: &'static str,
    },

    /// The template has an unterminated `{`.
    #[error("{endpoint}: unterminated placeholder in template")]
    Malformed {
        /// Endpoint being rendered.
        endpoint: Endpoint,
    },
}
