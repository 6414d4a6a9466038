use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
