use crate::api::error::ApiError;

use tl_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;

#[test]
fn validation_maps_to_400() {
    let err = ApiError::Validation {
        message: "email is required".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn handle_conflict_maps_to_409() {
    let err = ApiError::HandleConflict {
        handle: "u1".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn internal_maps_to_500() {
    let err = ApiError::Internal {
        message: "Database operation failed".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn db_handle_taken_converts_to_handle_conflict() {
    let db_err = DbError::handle_taken("u1");

    let api_err = ApiError::from(db_err);
    assert!(matches!(api_err, ApiError::HandleConflict { ref handle, .. } if handle == "u1"));
}

#[test]
fn db_sqlx_converts_to_internal() {
    let db_err = DbError::from(sqlx::Error::RowNotFound);

    let api_err = ApiError::from(db_err);
    assert!(matches!(api_err, ApiError::Internal { .. }));
}
