//! Webhook subscriptions.
//!
//! These types only describe the subscription endpoints under
//! `dash/businesses/{businessId}/settings/developer/webhooks`. Incoming
//! webhook deliveries are not parsed or verified here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtoError;
use crate::helpers::deserialize_optional_id;

/// Event types a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookEventType {
    /// A payment was created.
    PaymentCreated,
    /// The customer picked a payment method on the hosted page.
    PaymentMethodSelected,
    /// The payment expired before completion.
    PaymentExpired,
    /// The payment was cancelled.
    PaymentCancelled,
    /// The payment completed.
    PaymentCompleted,
    /// Funds were detected and are being confirmed.
    PaymentProcessing,
    /// An event type this crate does not know yet.
    ///
    /// Only produced when reading subscriptions back from the API, so one
    /// new event tag does not make the whole listing unreadable. Not a
    /// valid value to subscribe with.
    #[serde(other)]
    Unknown,
}

impl WebhookEventType {
    /// Every known event type, in wire order. Excludes [`Self::Unknown`].
    pub const ALL: [Self; 6] = [
        Self::PaymentCreated,
        Self::PaymentMethodSelected,
        Self::PaymentExpired,
        Self::PaymentCancelled,
        Self::PaymentCompleted,
        Self::PaymentProcessing,
    ];

    /// Returns the wire name, e.g. `"PAYMENT_CREATED"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaymentCreated => "PAYMENT_CREATED",
            Self::PaymentMethodSelected => "PAYMENT_METHOD_SELECTED",
            Self::PaymentExpired => "PAYMENT_EXPIRED",
            Self::PaymentCancelled => "PAYMENT_CANCELLED",
            Self::PaymentCompleted => "PAYMENT_COMPLETED",
            Self::PaymentProcessing => "PAYMENT_PROCESSING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookEventType {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ProtoError::UnknownEventType(s.to_owned()))
    }
}

/// A webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    /// Webhook identifier, present on subscriptions read back from the API.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Delivery URL.
    pub url: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Subscribed events, in the order they were registered.
    #[serde(default)]
    pub events: Vec<WebhookEventType>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST dash/businesses/{businessId}/settings/developer/webhooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    /// Delivery URL.
    pub url: String,
    /// Free-form description.
    pub description: String,
    /// Events to subscribe to.
    pub events: Vec<WebhookEventType>,
}

/// Response payload of the reset-secret endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSecret {
    /// The new signing secret.
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_types_use_screaming_snake_case() {
        for event in WebhookEventType::ALL {
            assert_eq!(serde_json::to_value(event).unwrap(), json!(event.as_str()));
            assert_eq!(event.to_string().parse::<WebhookEventType>().unwrap(), event);
        }
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let err = "PAYMENT_REFUNDED".parse::<WebhookEventType>().unwrap_err();
        assert!(matches!(err, ProtoError::UnknownEventType(name) if name == "PAYMENT_REFUNDED"));
    }

    #[test]
    fn unrecognized_event_in_listing_reads_as_unknown() {
        let configs: Vec<WebhookConfig> = serde_json::from_value(json!([{
            "url": "https://shop.example/hooks",
            "description": "all",
            "events": ["PAYMENT_REFUNDED", "PAYMENT_CREATED"]
        }]))
        .unwrap();
        assert_eq!(
            configs[0].events,
            vec![WebhookEventType::Unknown, WebhookEventType::PaymentCreated]
        );
        assert!("UNKNOWN".parse::<WebhookEventType>().is_err());
    }

    #[test]
    fn webhook_config_keeps_event_order() {
        let config: WebhookConfig = serde_json::from_value(json!({
            "id": "wh_1",
            "url": "https://shop.example/hooks",
            "description": "orders",
            "events": ["PAYMENT_COMPLETED", "PAYMENT_CREATED"]
        }))
        .unwrap();
        assert_eq!(
            config.events,
            vec![WebhookEventType::PaymentCompleted, WebhookEventType::PaymentCreated]
        );
        assert_eq!(config.id.as_deref(), Some("wh_1"));
    }
}
