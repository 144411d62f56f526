//! Message orchestrator implementation

use std::sync::Arc;

use courier_shared::types::ExternalMessage;

use crate::domain::value_objects::correlation::CorrelationId;
use crate::domain::value_objects::scope::{ScopeSet, PRIVATE_SERVICE, PUBLIC_SERVICE};
use crate::errors::DomainResult;
use crate::services::token;

use super::config::DownstreamTokenConfig;
use super::traits::{DownstreamMessageClient, PhraseSource};

/// Composes the public response from the sources the caller's scopes allow
pub struct MessageService<P, D>
where
    P: PhraseSource,
    D: DownstreamMessageClient,
{
    phrases: Arc<P>,
    downstream: Arc<D>,
    token_config: DownstreamTokenConfig,
}

impl<P, D> MessageService<P, D>
where
    P: PhraseSource,
    D: DownstreamMessageClient,
{
    pub fn new(phrases: Arc<P>, downstream: Arc<D>, token_config: DownstreamTokenConfig) -> Self {
        Self {
            phrases,
            downstream,
            token_config,
        }
    }

    /// Builds the response for `scopes`
    ///
    /// Scopes are evaluated independently; a caller holding neither known
    /// scope gets an empty message. Only the private branch performs I/O, and
    /// its failure fails the whole composition.
    pub async fn compose(
        &self,
        scopes: &ScopeSet,
        correlation_id: Option<&CorrelationId>,
    ) -> DomainResult<ExternalMessage> {
        let mut message = ExternalMessage::default();

        if scopes.contains(PUBLIC_SERVICE) {
            message.public_text = Some(self.phrases.phrase());
        }

        if scopes.contains(PRIVATE_SERVICE) {
            let token = token::issue_with_lifetime(
                &self.token_config.signing_key,
                self.token_config.lifetime_ms,
                [self.token_config.scope.as_str()],
            )?;

            tracing::debug!(
                lifetime_ms = self.token_config.lifetime_ms,
                "Minted downstream token, calling private service"
            );

            let internal = self.downstream.fetch_message(&token, correlation_id).await?;
            message.private_text = Some(internal.text);
        }

        if message.is_empty() {
            tracing::info!(scopes = %scopes, "No scope granted any message content");
        }

        Ok(message)
    }
}
