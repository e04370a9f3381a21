//! HTTP-facing error type.
//!
//! Every variant maps to a status code and a JSON body of the form
//! `{"error": ..., "status": ..., "detail": [{"field": ..., "message": ...}]}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use volatility_model::PredictionError;

/// Field-level validation detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Well-formed JSON that does not match the request schema (422).
    #[error("Validation failed for {}: {}", .0.field, .0.message)]
    Validation(FieldError),

    /// Body is not readable or not valid JSON (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body is not declared as JSON (415).
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Internal server error (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(FieldError {
            field: field.into(),
            message: message.into(),
        })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err.field() {
            Some(field) => AppError::validation(field, err.to_string()),
            None => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match self {
            AppError::Validation(field_error) => {
                ("Request validation failed".to_string(), vec![field_error])
            }
            AppError::BadRequest(msg)
            | AppError::UnsupportedMediaType(msg)
            | AppError::Internal(msg) => (msg, Vec::new()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
            "detail": detail,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
