//! Handler for the home page.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::error::{AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::templates::{GREETING, HOME_TEMPLATE};

/// Home page handler.
///
/// Renders the greeting page. The output depends only on the startup
/// configuration, never on the request's headers, query or body.
#[instrument(name = "home::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("greeting", GREETING);

    let html = state
        .tera
        .render(HOME_TEMPLATE, &context)
        .with_request_id(&request_id)?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    use crate::config::{AppConfig, CACHE_CONTROL_HOME};
    use crate::routes::create_router;
    use crate::state::AppState;

    fn app() -> Router {
        create_router(AppState::from_config(AppConfig::default()).unwrap())
    }

    async fn get(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    fn root() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[tokio::test]
    async fn test_root_returns_greeting() {
        let (status, body) = get(app(), root()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(contains(&body, b"Hello, DevOps World!"));
    }

    #[tokio::test]
    async fn test_root_is_html_with_cache_header() {
        let response = app().oneshot(root()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], CACHE_CONTROL_HOME);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let app = app();
        let (first_status, first) = get(app.clone(), root()).await;

        for _ in 0..5 {
            let (status, body) = get(app.clone(), root()).await;
            assert_eq!(status, first_status);
            assert_eq!(body, first);
        }
    }

    #[tokio::test]
    async fn test_headers_query_and_body_are_ignored() {
        let app = app();
        let (_, plain) = get(app.clone(), root()).await;

        let noisy = Request::builder()
            .method("GET")
            .uri("/?name=ops&verbose=1")
            .header(header::ACCEPT, "application/json")
            .header("x-custom", "anything")
            .body(Body::from("ignored payload"))
            .unwrap();
        let (status, body) = get(app, noisy).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, plain);
    }

    #[tokio::test]
    async fn test_site_name_is_rendered() {
        let mut config = AppConfig::default();
        config.ui.site_name = "Staging".to_string();
        let app = create_router(AppState::from_config(config).unwrap());

        let (status, body) = get(app, root()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(contains(&body, b"<title>Staging</title>"));
        assert!(contains(&body, b"Hello, DevOps World!"));
    }
}
