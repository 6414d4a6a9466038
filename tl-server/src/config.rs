use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;

use log::LevelFilter;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: treelink.db)
    pub database_path: PathBuf,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Optional log file; stdout when unset
    pub log_file: Option<PathBuf>,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse()
            .map_err(|_| ServerError::EnvVar {
                message: "LOG_LEVEL must be one of off, error, warn, info, debug, trace"
                    .to_string(),
            })?;

        Ok(Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("treelink.db")),

            log_level,

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        })
    }
}
