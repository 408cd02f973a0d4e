//! tracing-webapp
//!
//! A small JSON web service used to exercise distributed-tracing and
//! error-observability tooling.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ SetRequestId ─▶ TraceLayer ─▶ Timeout ─▶ metrics ─▶ handler
//!                                                                           │
//!                                          traceparent ─▶ TraceContext ─────┤
//!                                                                           ▼
//!     Client Response                                               ServiceResponse
//!     ◀──────────────────────────────────────────────────────────── (JSON body)
//! ```
//!
//! # Endpoints
//! - `GET /`               success payload with `trace_id`
//! - `GET /simulate-error` always 500, logged at error level
//! - `GET /health`         liveness
//! - `GET /metrics`        liveness (Prometheus scrape is on its own listener)
//! - `GET /trace`          trace echo

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tracing_webapp::config::{load_config, check_config, ServiceConfig};
use tracing_webapp::observability::{logging, metrics};
use tracing_webapp::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "tracing-webapp")]
#[command(about = "JSON web service with W3C trace context propagation", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        check_config(&config)?;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("tracing-webapp v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        log_format = ?config.observability.log_format,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
