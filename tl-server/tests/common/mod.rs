#![allow(dead_code)]

//! Test infrastructure for tl-server API tests

use tl_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // In-memory databases need a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/tl-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a profile row directly
pub async fn create_test_profile(pool: &SqlitePool, email: &str, handle: &str) {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO link_profiles (email, handle, profile_image, created_at, updated_at)
            VALUES (?, ?, NULL, ?, ?)
        "#,
    )
    .bind(email)
    .bind(handle)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test profile");
}

/// Append a link row directly
pub async fn add_test_link(pool: &SqlitePool, email: &str, position: i64, title: &str, url: &str) {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO links (profile_email, position, title, url, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(email)
    .bind(position)
    .bind(title)
    .bind(url)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test link");
}
