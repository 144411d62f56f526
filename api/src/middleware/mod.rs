pub mod auth;
pub mod correlation;

pub use auth::*;
pub use correlation::*;
