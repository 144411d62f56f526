//! Route handlers
//!
//! - `GET /message` on the public and private services
//! - `GET /health` on both

pub mod health;
pub mod message;

pub use health::{health_check, ServiceInfo};
pub use message::{message, private_message, PrivateState, PublicState};
