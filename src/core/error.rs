use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A delete was refused because other rows still reference the target
    #[error("Referential integrity: {0}")]
    ReferentialIntegrity(String),

    /// Asset upload failed; the enclosing save must not proceed
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Auth(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::ReferentialIntegrity(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::Upload(ref msg) => {
                tracing::error!("Upload error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Image upload failed: {}", msg),
                    None,
                )
            }
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

/// Map constraint violations from Postgres onto domain errors
///
/// `subject` names the entity in user-facing messages (e.g. "category").
pub fn map_db_error(e: sqlx::Error, subject: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // unique_violation
        if db_err.code().as_deref() == Some("23505") {
            return AppError::Conflict(format!(
                "A {} with this slug already exists",
                subject
            ));
        }

        // foreign_key_violation
        if db_err.code().as_deref() == Some("23503") {
            return AppError::ReferentialIntegrity(format!(
                "The {} is referenced by other records",
                subject
            ));
        }
    }

    tracing::error!("Database error on {}: {:?}", subject, e);
    AppError::Database(e)
}

pub type Result<T> = std::result::Result<T, AppError>;
