use crate::api::profile::profile::{add_link, delete_link, get_profile, set_handle, set_image};
use crate::api::public::public::resolve_profile;
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authenticated profile surface
        .route("/api/v1/profile", get(get_profile))
        .route("/api/v1/profile/links", post(add_link).delete(delete_link))
        .route("/api/v1/profile/handle", put(set_handle))
        .route("/api/v1/profile/photo", put(set_image))
        // Public profile resolver
        .route("/api/v1/profiles/{handle}", get(resolve_profile))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (the profile resolver is a public API)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
