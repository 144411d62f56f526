//! Value objects carried through a request

pub mod correlation;
pub mod scope;

pub use correlation::{CorrelationId, CORRELATION_ID_HEADER};
pub use scope::{ScopeSet, PRIVATE_SERVICE, PUBLIC_SERVICE};
