//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace span, timeout, metrics)
//!     → handlers.rs (one handler per endpoint, TraceContext extracted per request)
//!     → response.rs (shared JSON body: service, timestamp, endpoint fields)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::ServiceResponse;
pub use server::{AppState, HttpServer};
