use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use invoice_layout::LayoutError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Render error: {0}")]
    Render(#[from] LayoutError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "invoice request failed");

        let body = Json(json!({
            "detail": format!("Internal Server Error: {self}"),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
