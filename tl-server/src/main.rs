pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

use crate::app_state::AppState;

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration before anything that logs
    let config = config::Config::from_env()?;

    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting tl-server v{}", env!("CARGO_PKG_VERSION"));

    info!("Connecting to database: {}", config.database_path.display());
    let pool = tl_db::create_pool(&config.database_path).await?;
    info!("Database connection established, migrations complete");

    let app = routes::build_router(AppState { pool });

    let listener = TcpListener::bind(&config.bind_addr).await?;

    // Actual bound address matters when the port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
