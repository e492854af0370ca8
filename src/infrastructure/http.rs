use crate::domain::payment::{InitiatePaymentRequest, InitiationOutcome};
use crate::domain::ports::{PaymentGateway, TokenProviderBox};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT_PATH: &str = "/api/initiate-paypal-payment/";

/// Calls the backend's payment initiation endpoint over HTTP.
///
/// The body is decoded as JSON whatever the status code: the backend answers
/// rejections with `400` and an `error` field, which must reach the user.
pub struct HttpPaymentGateway {
    http: reqwest::Client,
    endpoint: Url,
    tokens: TokenProviderBox,
}

impl HttpPaymentGateway {
    pub fn new(
        base_url: &str,
        endpoint_path: &str,
        tokens: TokenProviderBox,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(
            http,
            endpoint_url(base_url, endpoint_path)?,
            tokens,
        ))
    }

    /// Create a gateway with a custom reqwest::Client.
    pub fn with_http_client(http: reqwest::Client, endpoint: Url, tokens: TokenProviderBox) -> Self {
        Self {
            http,
            endpoint,
            tokens,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub fn endpoint_url(base_url: &str, endpoint_path: &str) -> Result<Url> {
    Url::parse(base_url)
        .and_then(|base| base.join(endpoint_path))
        .map_err(|e| CheckoutError::InvalidUrl(format!("{base_url} + {endpoint_path}: {e}")))
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn initiate(&self, request: &InitiatePaymentRequest) -> Result<InitiationOutcome> {
        let token = self.tokens.token().await?;
        if token.is_none() {
            tracing::warn!("no auth token in storage, request will be rejected by the backend");
        }
        // An absent token is sent as the literal "null", which the backend rejects.
        let authorization = format!("Token {}", token.as_deref().unwrap_or("null"));

        tracing::debug!(endpoint = %self.endpoint, ticket_id = %request.ticket_id, "initiating payment");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        tracing::debug!(%status, "initiation response received");

        InitiationOutcome::from_body(&body)
    }
}
