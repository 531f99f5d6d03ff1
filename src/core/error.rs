use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::{ErrorResponse, FieldError};

/// Field-level validation failures keyed by `<source>.<field>`
pub type ValidationDetails = BTreeMap<String, FieldError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0:?}")]
    Validation(ValidationDetails),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Single-entry validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut details = ValidationDetails::new();
        details.insert(field.into(), FieldError::new(message));
        AppError::Validation(details)
    }

    /// Flatten `validator` errors into `<source>.<field>` entries
    pub fn from_validation_errors(source: &str, errors: &validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value ({})", e.code))
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                (format!("{}.{}", source, field), FieldError::new(message))
            })
            .collect();
        AppError::Validation(details)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorResponse::internal()
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::internal()
            }
            AppError::Validation(details) => ErrorResponse::validation(details),
            AppError::NotFound(msg) | AppError::BadRequest(msg) => {
                ErrorResponse::new(msg, status.as_u16())
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
