//! Public profile resolution
//!
//! Read-only lookup by public handle. No authentication; any caller may
//! read any public profile. A missing profile renders as an empty result.

use crate::api::error::Result as ApiResult;
use crate::api::profile::profile_view::ProfileView;
use crate::app_state::AppState;

use tl_db::LinkProfileRepository;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/profiles/{handle}
pub async fn resolve_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Json<ProfileView>> {
    let repo = LinkProfileRepository::new(state.pool.clone());
    let profile = repo.find_by_handle(&handle).await?;

    Ok(Json(ProfileView::from(profile)))
}
