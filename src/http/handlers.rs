//! Endpoint handlers.
//!
//! `/`, `/simulate-error` and `/trace` read the trace context and report it;
//! `/health` and `/metrics` never look at it.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
};

use crate::http::response::ServiceResponse;
use crate::http::server::AppState;
use crate::observability::TraceContext;

pub const SIMULATED_ERROR: &str = "Database connection timeout";

/// Success payload, echoing the caller's trace id.
pub async fn home(State(state): State<AppState>, trace: TraceContext) -> ServiceResponse {
    tracing::info!(trace_id = trace.trace_id(), "Home endpoint accessed successfully");

    ServiceResponse::new(StatusCode::OK, &state.service_name)
        .field("status", "success")
        .with_trace(&trace)
}

/// Always fails; lets downstream tooling observe a 500 with a known trace.
pub async fn simulate_error(State(state): State<AppState>, trace: TraceContext) -> ServiceResponse {
    tracing::error!(
        trace_id = trace.trace_id(),
        "Simulated error - Database connection timeout"
    );

    ServiceResponse::new(StatusCode::INTERNAL_SERVER_ERROR, &state.service_name)
        .field("error", SIMULATED_ERROR)
        .with_trace(&trace)
}

/// Liveness; never reads the trace context.
pub async fn health(State(state): State<AppState>) -> ServiceResponse {
    ServiceResponse::new(StatusCode::OK, &state.service_name).field("status", "healthy")
}

/// Liveness in the metrics shape; the Prometheus scrape lives on its own listener.
pub async fn metrics(State(state): State<AppState>) -> ServiceResponse {
    ServiceResponse::new(StatusCode::OK, &state.service_name).field("status", "running")
}

/// Echoes the trace id back to the caller.
pub async fn trace(State(state): State<AppState>, trace: TraceContext) -> ServiceResponse {
    tracing::info!(trace_id = trace.trace_id(), "Trace endpoint accessed");

    ServiceResponse::new(StatusCode::OK, &state.service_name)
        .field("message", "Trace endpoint accessed")
        .with_trace(&trace)
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ServiceResponse {
    tracing::warn!(path = %uri.path(), "No route matched");

    ServiceResponse::new(StatusCode::NOT_FOUND, &state.service_name)
        .field("status", StatusCode::NOT_FOUND.as_u16())
        .field("error", "Not Found")
        .field("path", uri.path())
}
