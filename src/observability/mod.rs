//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → tracing.rs (traceparent → TraceContext, passed to the handler)
//!     → handler log lines carry `trace_id` as a structured field
//!     → logging.rs (subscriber: filter + pretty/JSON formatter)
//!     → metrics.rs (request counters and latency histograms)
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;

pub use self::tracing::{extract_trace_id, TraceContext, TRACEPARENT};
