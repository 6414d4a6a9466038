//! REST API error types
//!
//! Every failure crossing the boundary becomes a flat `{"error": "..."}`
//! JSON body with the status code the operation contract assigns it.

use tl_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or selector absent (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Requested handle already owned by another account (409)
    #[error("Handle conflict: {handle} {location}")]
    HandleConflict {
        handle: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, error) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::HandleConflict { handle, .. } => (
                StatusCode::CONFLICT,
                format!("Handle '{}' already exists. Please choose another.", handle),
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ApiErrorResponse { error })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::HandleTaken { handle, .. } => ApiError::HandleConflict {
                handle,
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose internal database details to clients
            _ => {
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
