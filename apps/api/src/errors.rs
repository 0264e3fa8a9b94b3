use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Extraction failures and upstream completion failures are handled locally
/// (degrade to empty text / no cover letter) and never become `AppError`s.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file provided")]
    NoFileProvided,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected failures; handlers bubble these up via `?`.
    #[allow(dead_code)]
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NoFileProvided => (
                StatusCode::BAD_REQUEST,
                "NO_FILE_PROVIDED",
                "No file provided".to_string(),
            ),
            AppError::EmptyFilename => (
                StatusCode::BAD_REQUEST,
                "EMPTY_FILENAME",
                "No file selected".to_string(),
            ),
            AppError::UnsupportedFileType(ext) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FILE_TYPE",
                format!("Unsupported file type: {ext}"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
