//! HTTP server module.
//!
//! Serves plain HTTP via `axum-server`. TLS termination is left to a reverse
//! proxy in front of the service.
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - A `Handle` for discovering the bound address and stopping the server

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
