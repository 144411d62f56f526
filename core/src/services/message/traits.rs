//! Collaborators of the message orchestrator

use async_trait::async_trait;
use courier_shared::types::InternalMessage;

use crate::domain::value_objects::correlation::CorrelationId;
use crate::errors::DomainError;

/// Local capability producing the public text
pub trait PhraseSource: Send + Sync {
    fn phrase(&self) -> String;
}

/// Client for the private service's message resource
#[async_trait]
pub trait DownstreamMessageClient: Send + Sync {
    /// Fetches the private message using `token` as bearer credential and
    /// propagating `correlation_id` when one is known
    async fn fetch_message(
        &self,
        token: &str,
        correlation_id: Option<&CorrelationId>,
    ) -> Result<InternalMessage, DomainError>;
}
