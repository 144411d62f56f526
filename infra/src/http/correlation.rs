//! Outbound correlation id propagation

use courier_core::domain::value_objects::correlation::{CorrelationId, CORRELATION_ID_HEADER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Copies `correlation_id` into the outgoing headers
///
/// With no id in context no header is added.
pub fn propagate_correlation(headers: &mut HeaderMap, correlation_id: Option<&CorrelationId>) {
    let Some(id) = correlation_id else {
        return;
    };

    match HeaderValue::from_str(id.as_str()) {
        Ok(value) => {
            headers.insert(HeaderName::from_static("x-correlationid"), value);
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Correlation id is not a valid {} header value, not propagating",
                CORRELATION_ID_HEADER
            );
        }
    }
}
