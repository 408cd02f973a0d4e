//! Response construction.
//!
//! Every endpoint answers with a flat JSON object that always carries
//! `service` and `timestamp`; handlers only add the fields that vary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::observability::TraceContext;

/// Current instant as an ISO-8601 UTC timestamp (`2024-05-01T12:00:00.123Z`).
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// JSON response body under construction.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    status: StatusCode,
    body: Map<String, Value>,
}

impl ServiceResponse {
    /// Start a response with the common `service` and `timestamp` fields.
    pub fn new(status: StatusCode, service: &str) -> Self {
        let mut body = Map::new();
        body.insert("service".to_owned(), Value::from(service));
        body.insert("timestamp".to_owned(), Value::from(timestamp()));
        Self { status, body }
    }

    /// Add (or replace) a field.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_owned(), value.into());
        self
    }

    /// Add `trace_id`, as `null` when the request carried none.
    pub fn with_trace(self, trace: &TraceContext) -> Self {
        self.field("trace_id", trace.trace_id())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        (self.status, Json(Value::Object(self.body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_common_fields() {
        let response = ServiceResponse::new(StatusCode::OK, "tracing-webapp");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body()["service"], "tracing-webapp");
        let ts = response.body()["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_trace_id_null_when_absent() {
        let response = ServiceResponse::new(StatusCode::OK, "svc")
            .with_trace(&TraceContext::default());

        assert_eq!(response.body().get("trace_id"), Some(&Value::Null));
    }

    #[test]
    fn test_trace_id_present() {
        let trace = TraceContext::from_traceparent(Some("00-abc123-span1-01"));
        let response = ServiceResponse::new(StatusCode::OK, "svc").with_trace(&trace);

        assert_eq!(response.body()["trace_id"], "abc123");
    }

    #[test]
    fn test_field_overrides() {
        let response = ServiceResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "svc")
            .field("error", "first")
            .field("error", "second");

        assert_eq!(response.body()["error"], "second");
        assert_eq!(response.body().len(), 3);
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ServiceResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "svc").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
