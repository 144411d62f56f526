//! # Courier API
//!
//! HTTP layer of the public and private message services: middleware
//! (correlation id, token authentication gate), route handlers, the uniform
//! error normalizer and the application factories used by both binaries.

pub mod app;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_private_app, create_public_app};
