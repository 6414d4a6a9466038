//! Error taxonomy for the link record store.

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// A statement failed at the driver level.
    #[error("query failed: {source} {location}")]
    Query {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// The database file, schema, or migrations could not be prepared.
    #[error("store setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },

    /// A stored document held a value the model cannot represent.
    #[error("bad document: {message} {location}")]
    BadDocument {
        message: String,
        location: ErrorLocation,
    },

    /// The requested handle is already owned by another profile.
    #[error("handle '{handle}' is already taken {location}")]
    HandleTaken {
        handle: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_document(message: impl Into<String>) -> Self {
        Self::BadDocument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn handle_taken(handle: impl Into<String>) -> Self {
        Self::HandleTaken {
            handle: handle.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Query {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
