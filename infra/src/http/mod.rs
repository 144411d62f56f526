//! HTTP clients for downstream services

mod correlation;
mod private_service_client;

pub use correlation::propagate_correlation;
pub use private_service_client::PrivateServiceClient;
