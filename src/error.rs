use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        AppErrorResponse {
            error: self,
            request_id: None,
        }
        .into_response()
    }
}

/// An `AppError` tagged with the id of the request that produced it,
/// so the error page can be matched against the logs.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: Option<RequestId>,
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let reference = self
            .request_id
            .as_ref()
            .map(|id| id.0.to_string())
            .unwrap_or_else(|| "-".to_string());

        tracing::error!(error = ?self.error, request_id = %reference, "Internal error");

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body>
    <h1>Error {}</h1>
    <p>Internal server error</p>
    <p>Reference: {}</p>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            reference
        );

        (status, Html(body)).into_response()
    }
}

/// Attach the current request id to an error on its way out of a handler.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: Some(request_id.clone()),
        })
    }
}
