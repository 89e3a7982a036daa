//! Error types for the catalog server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Positional index outside `0..len` on a store that reports it
    #[error("Id out of range")]
    IdOutOfRange,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::IdOutOfRange | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            // Clients match on the bare message text
            AppError::IdOutOfRange => (status, self.to_string()).into_response(),
            AppError::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);
                let body = Json(ErrorResponse {
                    code: status.as_u16(),
                    error: status
                        .canonical_reason()
                        .unwrap_or("Bad Request")
                        .to_string(),
                    message: message.clone(),
                });
                (status, body).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
