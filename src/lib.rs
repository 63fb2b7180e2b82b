//! hello-devops: a single-route HTTP service that answers `GET /` with a
//! fixed greeting page.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::GREETING;
