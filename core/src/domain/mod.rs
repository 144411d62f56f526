//! Domain layer containing token claims and request-scoped value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::TokenClaims;
pub use value_objects::{
    CorrelationId, ScopeSet, CORRELATION_ID_HEADER, PRIVATE_SERVICE, PUBLIC_SERVICE,
};
