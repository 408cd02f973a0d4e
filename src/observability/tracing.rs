//! Distributed tracing support.
//!
//! # Responsibilities
//! - Extract the trace identifier from the W3C `traceparent` header
//! - Carry it through a handler as a request-scoped value
//!
//! # Design Decisions
//! - No validation of version, length or character set: the second
//!   hyphen-delimited field is taken verbatim
//! - The trace identifier is passed explicitly into log calls, never stored
//!   in shared state, so it cannot outlive the request that produced it

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Name of the W3C trace context header.
pub const TRACEPARENT: &str = "traceparent";

/// Extract the trace identifier from a raw `traceparent` value.
///
/// The header has the shape `version-traceid-parentid-flags`. Returns the
/// second `-` delimited field, or `None` when the value is absent, empty or
/// contains no hyphen at all. Never fails. Empty fields are kept, so `"00-"`
/// yields `Some("")` rather than `None`.
///
/// ```
/// use tracing_webapp::observability::tracing::extract_trace_id;
///
/// assert_eq!(extract_trace_id(Some("00-abc123-span1-01")).as_deref(), Some("abc123"));
/// assert_eq!(extract_trace_id(Some("00")), None);
/// assert_eq!(extract_trace_id(None), None);
/// ```
pub fn extract_trace_id(traceparent: Option<&str>) -> Option<String> {
    let traceparent = traceparent.filter(|value| !value.is_empty())?;
    traceparent.split('-').nth(1).map(str::to_owned)
}

/// Trace context of a single inbound request.
///
/// Used as an axum extractor; a missing or non-ASCII `traceparent` header
/// yields an empty context rather than a rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    trace_id: Option<String>,
}

impl TraceContext {
    /// Build a context from a raw `traceparent` value.
    pub fn from_traceparent(traceparent: Option<&str>) -> Self {
        Self {
            trace_id: extract_trace_id(traceparent),
        }
    }

    /// The trace identifier, if the request carried one.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl<S> FromRequestParts<S> for TraceContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(TRACEPARENT)
            .and_then(|value| value.to_str().ok());

        Ok(Self::from_traceparent(header))
    }
}
