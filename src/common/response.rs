use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorView {
    pub message: String,
}

/// Generic error page for business-level misses ("Resource not found!").
/// The page flow renders it with a 200 status rather than a 404.
pub struct PageError(pub String);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ErrorView { message: self.0 })).into_response()
    }
}

/// Fault boundary for unexpected store failures: logged here, surfaced to
/// the client as a generic server error.
pub struct ServerError(pub anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorView {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
