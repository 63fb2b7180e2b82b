//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone());

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is shut down.
///
/// Binding to port 0 picks a free port; the actual address is available
/// from `handle.listening()` once the listener is up.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AddrInUse | std::io::ErrorKind::PermissionDenied => {
                ServerError::Bind(e)
            }
            _ => ServerError::Server(e.to_string()),
        })
}
