//! Domain error types for the test case manager.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Which side of a relationship a missing reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceScope {
    /// The entity a new record hangs off (a release's product, a step's case).
    Parent,
    /// A target named in a relation set (platform ids, related case ids).
    Target,
}

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// A key that must be unique matched more than one row
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// The entity targeted by an id-based operation does not exist
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A foreign id supplied by the caller does not resolve
    #[error("{}", reference_message(entity, *id, *scope))]
    ReferenceNotFound {
        entity: &'static str,
        id: i32,
        scope: ReferenceScope,
    },

    /// Invalid input data
    #[error("{0}")]
    InvalidInput(String),
}

fn reference_message(entity: &str, id: i32, scope: ReferenceScope) -> String {
    match scope {
        ReferenceScope::Parent => format!("{} not found", entity),
        ReferenceScope::Target => format!("{} not found: {}", entity, id),
    }
}

impl AppError {
    /// Shorthand for a validation failure.
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::Database(_) | AppError::DataIntegrity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ReferenceNotFound {
                scope: ReferenceScope::Parent,
                ..
            } => StatusCode::NOT_FOUND,
            AppError::ReferenceNotFound {
                scope: ReferenceScope::Target,
                ..
            } => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                "An internal database error occurred".to_string()
            }
            AppError::DataIntegrity(err_str) => {
                tracing::error!("Data integrity error: {}", err_str);
                "An internal data integrity error occurred".to_string()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}
