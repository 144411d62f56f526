//! Wire types shared between services and clients
//!
//! - `message` - message payloads of the public and private services
//! - `response` - health check responses

pub mod message;
pub mod response;

pub use message::{ExternalMessage, InternalMessage};
pub use response::{HealthResponse, HealthStatus};
