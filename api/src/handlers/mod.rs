//! Error normalization and fallback handlers

pub mod error;

pub use error::{method_not_allowed, not_found, ApiError};
