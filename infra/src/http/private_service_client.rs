//! Client for the private service's message resource

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, error};

use courier_core::domain::value_objects::correlation::CorrelationId;
use courier_core::errors::DomainError;
use courier_core::services::message::DownstreamMessageClient;
use courier_shared::config::{DownstreamConfig, HttpClientConfig};
use courier_shared::types::InternalMessage;

use super::correlation::propagate_correlation;
use crate::InfrastructureError;

/// reqwest-backed client for `GET <message uri>` on the private service
///
/// Connect and total request timeouts are both taken from one configured
/// duration. Requests are never retried.
#[derive(Debug, Clone)]
pub struct PrivateServiceClient {
    client: reqwest::Client,
    message_uri: String,
}

impl PrivateServiceClient {
    pub fn new(
        downstream: &DownstreamConfig,
        http: &HttpClientConfig,
    ) -> Result<Self, InfrastructureError> {
        if downstream.message_uri.is_empty() {
            return Err(InfrastructureError::Config(
                "downstream message URI is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .connect_timeout(http.timeout())
            .build()?;

        Ok(Self {
            client,
            message_uri: downstream.message_uri.clone(),
        })
    }

    /// Fetches the private message, presenting `token` as bearer credential
    pub async fn get_message(
        &self,
        token: &str,
        correlation_id: Option<&CorrelationId>,
    ) -> Result<InternalMessage, InfrastructureError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        propagate_correlation(&mut headers, correlation_id);

        debug!(uri = %self.message_uri, "Requesting private message");

        let message = self
            .client
            .get(&self.message_uri)
            .headers(headers)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<InternalMessage>()
            .await?;

        Ok(message)
    }
}

#[async_trait]
impl DownstreamMessageClient for PrivateServiceClient {
    async fn fetch_message(
        &self,
        token: &str,
        correlation_id: Option<&CorrelationId>,
    ) -> Result<InternalMessage, DomainError> {
        self.get_message(token, correlation_id).await.map_err(|e| {
            error!(error = %e, uri = %self.message_uri, "Private service call failed");
            DomainError::from(e)
        })
    }
}
