//! HTTP route handlers.
//!
//! The service answers a single route, `GET /`. Anything else falls through
//! to axum's default 404/405 handling.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the root route and its cache header.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    Router::new()
        .merge(home_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
