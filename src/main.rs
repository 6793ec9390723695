//! BlueGreen: static health and banner responder.
//!
//! Entry point. Parses the command line, initializes tracing, builds the
//! router, and serves it on the fixed wildcard address. A bind failure is
//! printed to stderr and the process exits non-zero.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bluegreen::config::{listen_addr, DEFAULT_LOG_FILTER};
use bluegreen::create_router;
use bluegreen::server::start_server;

/// BlueGreen: health-check and banner responder on 0.0.0.0:8080
#[derive(Parser, Debug)]
#[command(name = "bluegreen", version, about)]
struct Args {
    /// Log level filter (e.g., "bluegreen=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %listen_addr(),
        "Starting BlueGreen responder"
    );

    let app = create_router();
    match start_server(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
