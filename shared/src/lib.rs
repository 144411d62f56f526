//! Shared configuration and wire types for the Courier services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - The uniform error body returned by every service
//! - Message payloads exchanged between clients and services

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DownstreamConfig, Environment, HttpClientConfig,
    LogFormat, LoggingConfig, ServerConfig, ServiceProfile,
};
pub use errors::{error_messages, ErrorResponse};
pub use types::{ExternalMessage, HealthResponse, HealthStatus, InternalMessage};
