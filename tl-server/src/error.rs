use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: AddrParseError,
    },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },

    #[error("Logger setup failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
