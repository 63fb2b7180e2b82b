//! hello-devops: greets the DevOps world over HTTP.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, builds the Axum router and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_devops::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hello_devops::http::start_server;
use hello_devops::{create_router, AppState};

/// hello-devops: a minimal greeting service
#[derive(Parser, Debug)]
#[command(name = "hello-devops", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hello_devops=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first: it decides the log format
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.log_format()? {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    tracing::info!(
        path = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let state = AppState::from_config(config.clone())?;
    let app = create_router(state);

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
