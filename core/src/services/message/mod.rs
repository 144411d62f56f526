//! Scope-gated message orchestration
//!
//! Each authorized scope independently decides which source contributes to
//! the response: the local phrase source for `PUBLIC_SERVICE`, the private
//! service (called with a freshly minted token) for `PRIVATE_SERVICE`.

mod config;
mod service;
mod traits;


pub use config::DownstreamTokenConfig;
pub use service::MessageService;
pub use traits::{DownstreamMessageClient, PhraseSource};
