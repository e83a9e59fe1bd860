//! The Hoodpay endpoint facade.
//!
//! [`Hoodpay`] exposes one async method per API operation. Each method
//! renders its fixed [`Endpoint`] template with the business id bound at
//! construction and the identifiers passed by the caller, hands the request
//! to a [`Transport`] and returns the decoded body. Errors from the
//! transport are returned as they are; nothing is retried.

use std::sync::Arc;

use hoodpay_proto::{
    ApiResponse, Business, CreatePaymentRequest, CreateWebhookRequest, CustomerEmailRequest,
    EmptyBody, Payment, PaymentList, SelectPaymentMethodRequest, UpdateNoteRequest,
    WebhookConfig, WebhookEventType, WebhookSecret,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::config::ClientConfig;
use crate::constants::CHECKOUT_BASE_URL;
use crate::endpoint::{Endpoint, PathParams};
use crate::error::Error;
use crate::hooks::{NoopObserver, RequestInfo, RequestObserver};
use crate::transport::{ApiClient, Transport, decode};

/// Returns the hosted checkout URL of a payment. No request is made and the
/// id is not validated.
///
/// ```rust
/// assert_eq!(
///     hoodpay::checkout_url("pay_42"),
///     "https://checkout.hoodpay.io/pay_42"
/// );
/// ```
#[must_use]
pub fn checkout_url(payment_id: &str) -> String {
    format!("{CHECKOUT_BASE_URL}{payment_id}")
}

/// Client for the Hoodpay API, scoped to one business.
///
/// Cheap to clone; clones share the transport. Configuration is fixed at
/// construction, so a single instance can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use hoodpay::{CreatePaymentRequest, Hoodpay};
///
/// # async fn run() -> Result<(), hoodpay::Error> {
/// let hoodpay = Hoodpay::new("your-api-key", "your-business-id")?;
/// let created = hoodpay
///     .create_payment(&CreatePaymentRequest::new(25.0, "USD").with_name("T-shirt"))
///     .await?;
/// if let Some(payment) = created.data {
///     println!("pay at {}", hoodpay.checkout_url(&payment.id));
/// }
/// # Ok(())
/// # }
/// ```
pub struct Hoodpay<T = ApiClient> {
    transport: Arc<T>,
    business_id: Arc<str>,
    observer: Arc<dyn RequestObserver>,
}

impl Hoodpay<ApiClient> {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(api_key: &str, business_id: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(api_key, business_id, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_config(
        api_key: &str,
        business_id: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, Error> {
        let transport = ApiClient::with_config(api_key, config)?;
        Ok(Self::with_transport(transport, business_id))
    }
}

impl<T: Transport> Hoodpay<T> {
    /// Creates a client over any transport.
    pub fn with_transport(transport: T, business_id: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(transport),
            business_id: Arc::from(business_id.into()),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Installs a request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the business this client is scoped to.
    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists the business's payments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn get_payments(&self) -> Result<ApiResponse<PaymentList>, Error> {
        self.envelope(Endpoint::GetPayments, None, None, None).await
    }

    /// Creates a payment.
    ///
    /// The request is sent as-is; no fields are added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<ApiResponse<Payment>, Error> {
        let body = to_body(request)?;
        self.envelope(Endpoint::CreatePayment, None, None, Some(body))
            .await
    }

    /// Fetches one payment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn get_payment(&self, payment_id: &str) -> Result<ApiResponse<Payment>, Error> {
        self.envelope(Endpoint::GetPayment, Some(payment_id), None, None)
            .await
    }

    /// Replaces the merchant note of a payment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn update_payment_note(
        &self,
        payment_id: &str,
        note: impl Into<String>,
    ) -> Result<ApiResponse<Payment>, Error> {
        let body = to_body(&UpdateNoteRequest { note: note.into() })?;
        self.envelope(Endpoint::UpdatePaymentNote, Some(payment_id), None, Some(body))
            .await
    }

    /// Fetches a payment through the public hosted-page endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn get_live_payment(&self, payment_id: &str) -> Result<ApiResponse<Payment>, Error> {
        self.envelope(Endpoint::GetLivePayment, Some(payment_id), None, None)
            .await
    }

    /// Selects the payment method on the hosted page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn select_payment_method(
        &self,
        payment_id: &str,
        payment_method: impl Into<String>,
    ) -> Result<ApiResponse<Payment>, Error> {
        let body = to_body(&SelectPaymentMethodRequest {
            payment_method: payment_method.into(),
        })?;
        self.envelope(Endpoint::SelectPaymentMethod, Some(payment_id), None, Some(body))
            .await
    }

    /// Fills in the customer email on the hosted page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn update_customer_email(
        &self,
        payment_id: &str,
        email: impl Into<String>,
    ) -> Result<ApiResponse<Payment>, Error> {
        let body = to_body(&CustomerEmailRequest {
            email: email.into(),
        })?;
        self.envelope(Endpoint::UpdateCustomerEmail, Some(payment_id), None, Some(body))
            .await
    }

    /// Cancels a payment from the hosted page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn cancel_payment(&self, payment_id: &str) -> Result<ApiResponse<Payment>, Error> {
        let body = to_body(&EmptyBody::default())?;
        self.envelope(Endpoint::CancelPayment, Some(payment_id), None, Some(body))
            .await
    }

    /// Lists webhook subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn get_webhooks(&self) -> Result<ApiResponse<Vec<WebhookConfig>>, Error> {
        self.envelope(Endpoint::GetWebhooks, None, None, None).await
    }

    /// Registers a webhook subscription.
    ///
    /// Events are sent in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn create_webhook(
        &self,
        url: impl Into<String>,
        description: impl Into<String>,
        events: impl IntoIterator<Item = WebhookEventType>,
    ) -> Result<ApiResponse<WebhookConfig>, Error> {
        let body = to_body(&CreateWebhookRequest {
            url: url.into(),
            description: description.into(),
            events: events.into_iter().collect(),
        })?;
        self.envelope(Endpoint::CreateWebhook, None, None, Some(body))
            .await
    }

    /// Rotates the webhook signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn reset_webhook_secret(&self) -> Result<ApiResponse<WebhookSecret>, Error> {
        let body = to_body(&EmptyBody::default())?;
        self.envelope(Endpoint::ResetWebhookSecret, None, None, Some(body))
            .await
    }

    /// Deletes a webhook subscription. Any response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), Error> {
        self.dispatch(Endpoint::DeleteWebhook, None, Some(webhook_id), None)
            .await
            .map(drop)
    }

    /// Lists the businesses visible to the API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the request fails.
    pub async fn get_businesses(&self) -> Result<ApiResponse<Vec<Business>>, Error> {
        self.envelope(Endpoint::GetBusinesses, None, None, None).await
    }

    /// Returns the hosted checkout URL of a payment. See [`checkout_url`].
    #[must_use]
    pub fn checkout_url(&self, payment_id: &str) -> String {
        checkout_url(payment_id)
    }

    /// Dispatches and decodes an enveloped response. An empty body yields an
    /// empty envelope.
    async fn envelope<D>(
        &self,
        endpoint: Endpoint,
        payment_id: Option<&str>,
        webhook_id: Option<&str>,
        body: Option<Value>,
    ) -> Result<ApiResponse<D>, Error>
    where
        D: DeserializeOwned,
    {
        let info = self.request_info(endpoint, payment_id, webhook_id)?;
        let result = self.send(&info, body).await.and_then(|value| {
            if value.is_null() {
                Ok(ApiResponse::default())
            } else {
                decode(value)
            }
        });
        if let Err(err) = &result {
            self.observer.on_failure(&info, err);
        }
        result
    }

    /// Dispatches a request and returns the raw JSON body.
    async fn dispatch(
        &self,
        endpoint: Endpoint,
        payment_id: Option<&str>,
        webhook_id: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let info = self.request_info(endpoint, payment_id, webhook_id)?;
        let result = self.send(&info, body).await;
        if let Err(err) = &result {
            self.observer.on_failure(&info, err);
        }
        result
    }

    /// Renders the endpoint path. Fails before anything is sent if a
    /// placeholder is left.
    fn request_info(
        &self,
        endpoint: Endpoint,
        payment_id: Option<&str>,
        webhook_id: Option<&str>,
    ) -> Result<RequestInfo, Error> {
        let params = PathParams {
            business_id: &self.business_id,
            payment_id,
            webhook_id,
        };
        Ok(RequestInfo {
            endpoint,
            method: endpoint.method(),
            path: endpoint.render(&params)?,
        })
    }

    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "hoodpay.request",
            skip_all,
            fields(endpoint = %info.endpoint, method = %info.method),
            err
        )
    )]
    async fn send(&self, info: &RequestInfo, body: Option<Value>) -> Result<Value, Error> {
        self.observer.on_request(info);
        let value = self
            .transport
            .send(info.method.clone(), &info.path, body)
            .await?;
        self.observer.on_response(info, &value);
        Ok(value)
    }
}

impl<T> Clone for Hoodpay<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            business_id: Arc::clone(&self.business_id),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Hoodpay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hoodpay")
            .field("business_id", &self.business_id)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, Error> {
    Ok(serde_json::to_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        method: Method,
        path: String,
        body: Option<Value>,
    }

    /// Records every call and answers with a fixed reply.
    #[derive(Debug)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
        reply: Result<Value, String>,
    }

    impl RecordingTransport {
        fn replying(value: Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Ok(value),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Err(message.to_owned()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
        ) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call {
                method,
                path: path.to_owned(),
                body,
            });
            self.reply.clone().map_err(Error::request_failure)
        }
    }

    /// Calls every operation once, discarding successful payloads.
    async fn call_all<T: Transport>(client: &Hoodpay<T>) -> Vec<(Endpoint, Result<(), Error>)> {
        vec![
            (Endpoint::GetPayments, client.get_payments().await.map(drop)),
            (
                Endpoint::CreatePayment,
                client
                    .create_payment(&CreatePaymentRequest::new(1.0, "USD"))
                    .await
                    .map(drop),
            ),
            (Endpoint::GetPayment, client.get_payment("p1").await.map(drop)),
            (
                Endpoint::UpdatePaymentNote,
                client.update_payment_note("p1", "n").await.map(drop),
            ),
            (Endpoint::GetLivePayment, client.get_live_payment("p1").await.map(drop)),
            (
                Endpoint::SelectPaymentMethod,
                client.select_payment_method("p1", "BITCOIN").await.map(drop),
            ),
            (
                Endpoint::UpdateCustomerEmail,
                client.update_customer_email("p1", "a@b.c").await.map(drop),
            ),
            (Endpoint::CancelPayment, client.cancel_payment("p1").await.map(drop)),
            (Endpoint::GetWebhooks, client.get_webhooks().await.map(drop)),
            (
                Endpoint::CreateWebhook,
                client
                    .create_webhook("https://x.test", "d", [WebhookEventType::PaymentCreated])
                    .await
                    .map(drop),
            ),
            (
                Endpoint::ResetWebhookSecret,
                client.reset_webhook_secret().await.map(drop),
            ),
            (Endpoint::DeleteWebhook, client.delete_webhook("wh1").await),
            (Endpoint::GetBusinesses, client.get_businesses().await.map(drop)),
        ]
    }

    #[tokio::test]
    async fn get_payment_dispatches_get_and_returns_body_unchanged() {
        let body = json!({ "message": "ok", "data": { "id": "abc123", "amount": 10, "currency": "USD" } });
        let client = Hoodpay::with_transport(RecordingTransport::replying(body.clone()), "b");

        let response = client.get_payment("abc123").await.unwrap();

        assert_eq!(
            client.transport().calls(),
            vec![Call {
                method: Method::GET,
                path: "businesses/b/payments/abc123".to_owned(),
                body: None,
            }]
        );
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[tokio::test]
    async fn create_payment_sends_request_without_extra_fields() {
        let client = Hoodpay::with_transport(RecordingTransport::replying(json!({})), "b");

        client
            .create_payment(&CreatePaymentRequest::new(1000.0, "USD"))
            .await
            .unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].path, "businesses/b/payments");
        assert_eq!(
            calls[0].body,
            Some(json!({ "amount": 1000, "currency": "USD" }))
        );
    }

    #[tokio::test]
    async fn delete_webhook_resolves_without_payload() {
        let client = Hoodpay::with_transport(
            RecordingTransport::replying(json!({ "message": "deleted" })),
            "b",
        );

        client.delete_webhook("wh_1").await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].method, Method::DELETE);
        assert_eq!(
            calls[0].path,
            "dash/businesses/b/settings/developer/webhooks/wh_1"
        );
    }

    #[tokio::test]
    async fn every_operation_uses_its_verb_path_and_body() {
        let client = Hoodpay::with_transport(RecordingTransport::replying(Value::Null), "biz");

        for (endpoint, result) in call_all(&client).await {
            assert!(result.is_ok(), "{endpoint}: {result:?}");
        }

        let calls = client.transport().calls();
        let expected = [
            (Method::GET, "businesses/biz/payments", None),
            (
                Method::POST,
                "businesses/biz/payments",
                Some(json!({ "amount": 1, "currency": "USD" })),
            ),
            (Method::GET, "businesses/biz/payments/p1", None),
            (
                Method::PUT,
                "businesses/biz/payments/p1/note",
                Some(json!({ "note": "n" })),
            ),
            (Method::GET, "public/payments/hosted-page/p1", None),
            (
                Method::POST,
                "public/payments/hosted-page/p1/select-payment-method",
                Some(json!({ "payment_method": "BITCOIN" })),
            ),
            (
                Method::POST,
                "public/payments/hosted-page/p1/customer_email",
                Some(json!({ "email": "a@b.c" })),
            ),
            (
                Method::POST,
                "public/payments/hosted-page/p1/cancel",
                Some(json!({})),
            ),
            (Method::GET, "dash/businesses/biz/settings/developer/webhooks", None),
            (
                Method::POST,
                "dash/businesses/biz/settings/developer/webhooks",
                Some(json!({
                    "url": "https://x.test",
                    "description": "d",
                    "events": ["PAYMENT_CREATED"]
                })),
            ),
            (
                Method::POST,
                "dash/businesses/biz/settings/developer/webhooks/reset-secret",
                Some(json!({})),
            ),
            (
                Method::DELETE,
                "dash/businesses/biz/settings/developer/webhooks/wh1",
                None,
            ),
            (Method::GET, "dash/businesses", None),
        ];
        assert_eq!(calls.len(), expected.len());
        for (call, (method, path, body)) in calls.iter().zip(expected) {
            assert_eq!(call.method, method, "{path}");
            assert_eq!(call.path, path);
            assert_eq!(call.body, body, "{path}");
        }
    }

    #[tokio::test]
    async fn transport_failures_propagate_from_every_operation() {
        let client = Hoodpay::with_transport(
            RecordingTransport::failing("Request failed with status code 500 Internal Server Error"),
            "b",
        );

        let results = call_all(&client).await;
        assert_eq!(results.len(), Endpoint::ALL.len());
        for (endpoint, result) in results {
            let err = result.unwrap_err();
            assert!(err.is_request_failure(), "{endpoint}");
            assert_eq!(
                err.message(),
                "Request failed with status code 500 Internal Server Error"
            );
        }
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_request_failure() {
        let client =
            Hoodpay::with_transport(RecordingTransport::replying(json!({ "data": "nope" })), "b");
        let err = client.get_webhooks().await.unwrap_err();
        assert!(err.is_request_failure());
    }

    #[tokio::test]
    async fn empty_ids_fail_before_dispatch() {
        let client = Hoodpay::with_transport(RecordingTransport::replying(json!({})), "b");

        let err = client.get_payment("").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPath(crate::PathError::Unresolved {
                endpoint: Endpoint::GetPayment,
                ..
            })
        ));
        assert!(matches!(
            client.delete_webhook("").await.unwrap_err(),
            Error::InvalidPath(_)
        ));
        assert!(matches!(
            client.update_payment_note("", "n").await.unwrap_err(),
            Error::InvalidPath(_)
        ));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn traversal_ids_stay_on_their_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(format!("{}/v1", server.uri()));
        let client = Hoodpay::with_config("k", "b", config).unwrap();
        client
            .get_live_payment("../../../dash/businesses")
            .await
            .unwrap();
        assert!(matches!(
            client.get_live_payment("..").await.unwrap_err(),
            Error::InvalidPath(crate::PathError::DotSegment { .. })
        ));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(
            requests[0]
                .url
                .path()
                .starts_with("/v1/public/payments/hosted-page/"),
            "{}",
            requests[0].url
        );
    }

    #[tokio::test]
    async fn checkout_url_is_local() {
        let client = Hoodpay::with_transport(RecordingTransport::replying(json!({})), "b");
        assert_eq!(client.checkout_url("pay_42"), "https://checkout.hoodpay.io/pay_42");
        assert!(client.transport().calls().is_empty());
    }

    #[derive(Default)]
    struct EventLog(Mutex<Vec<String>>);

    impl RequestObserver for EventLog {
        fn on_request(&self, info: &RequestInfo) {
            self.0.lock().unwrap().push(format!("request {} {}", info.method, info.path));
        }

        fn on_response(&self, info: &RequestInfo, _body: &Value) {
            self.0.lock().unwrap().push(format!("response {}", info.endpoint));
        }

        fn on_failure(&self, info: &RequestInfo, error: &Error) {
            self.0
                .lock()
                .unwrap()
                .push(format!("failure {} {error}", info.endpoint));
        }
    }

    #[tokio::test]
    async fn observer_sees_requests_and_failures() {
        let log = Arc::new(EventLog::default());
        let observer: Arc<dyn RequestObserver> = Arc::<EventLog>::clone(&log);
        let ok = Hoodpay::with_transport(RecordingTransport::replying(json!({})), "b")
            .with_observer(Arc::clone(&observer));
        ok.get_businesses().await.unwrap();

        let failing = Hoodpay::with_transport(RecordingTransport::failing("boom"), "b")
            .with_observer(Arc::clone(&observer));
        failing.get_payment("p").await.unwrap_err();

        assert_eq!(
            *log.0.lock().unwrap(),
            vec![
                "request GET dash/businesses".to_owned(),
                "response get_businesses".to_owned(),
                "request GET businesses/b/payments/p".to_owned(),
                "failure get_payment boom".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn api_key_only_travels_in_the_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(header("authorization", "Bearer key-1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(format!("{}/v1", server.uri()));
        let client = Hoodpay::with_config("key-1234", "b", config).unwrap();
        for (endpoint, result) in call_all(&client).await {
            assert!(result.is_ok(), "{endpoint}: {result:?}");
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), Endpoint::ALL.len());
        for request in requests {
            assert!(!request.url.as_str().contains("key-1234"));
            assert!(request.url.path().starts_with("/v1/"));
        }
    }

    #[tokio::test]
    async fn end_to_end_create_then_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/businesses/b/payments"))
            .and(body_json(json!({ "amount": 1000, "currency": "USD" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Payment created",
                "data": { "id": "pay_9", "url": "https://checkout.hoodpay.io/pay_9" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/businesses/b/payments/pay_9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "pay_9", "amount": 1000, "currency": "USD", "status": "PENDING" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(format!("{}/v1/", server.uri()));
        let client = Hoodpay::with_config("k", "b", config).unwrap();

        let created = client
            .create_payment(&CreatePaymentRequest::new(1000.0, "USD"))
            .await
            .unwrap();
        let id = created.into_data().unwrap().id;
        let fetched = client.get_payment(&id).await.unwrap().into_data().unwrap();
        assert_eq!(fetched.status.as_deref(), Some("PENDING"));
        assert_eq!(client.checkout_url(&id), "https://checkout.hoodpay.io/pay_9");
    }

    #[tokio::test]
    async fn clones_serve_concurrent_calls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/payments/hosted-page/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "a" } })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/public/payments/hosted-page/b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "b" } })))
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(format!("{}/v1", server.uri()));
        let client = Hoodpay::with_config("k", "biz", config).unwrap();
        let other = client.clone();

        let (a, b) = tokio::join!(client.get_live_payment("a"), other.get_live_payment("b"));
        assert_eq!(a.unwrap().into_data().unwrap().id, "a");
        assert_eq!(b.unwrap().into_data().unwrap().id, "b");
        assert_eq!(other.business_id(), "biz");
    }

    #[tokio::test]
    async fn server_error_rejects_with_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "bad email" })))
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(server.uri());
        let client = Hoodpay::with_config("k", "b", config).unwrap();
        let err = client
            .update_customer_email("p", "not-an-email")
            .await
            .unwrap_err();
        assert!(
            err.message()
                .starts_with("Request failed with status code 422 Unprocessable Entity: POST ")
        );
    }
}
