use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapscribeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image decode error: {0}")]
    Decode(String),

    /// Carries the provider's own message verbatim so it can be shown inline.
    #[error("{0}")]
    OcrService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for SnapscribeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SnapscribeError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            SnapscribeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SnapscribeError::Decode(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SnapscribeError::OcrService(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            SnapscribeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, SnapscribeError>;
