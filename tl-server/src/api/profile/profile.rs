//! Profile REST API handlers
//!
//! The read/write surface over a user's link collection: fetch, append
//! link, remove link, change handle, change image. The caller's email is
//! taken on trust; identity verification happens upstream.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::profile::add_link_request::AddLinkRequest;
use crate::api::profile::delete_link_query::DeleteLinkQuery;
use crate::api::profile::get_profile_query::GetProfileQuery;
use crate::api::profile::message_response::MessageResponse;
use crate::api::profile::profile_view::ProfileView;
use crate::api::profile::set_handle_request::SetHandleRequest;
use crate::api::profile::set_image_request::SetImageRequest;
use crate::api::profile::update_image_response::UpdateImageResponse;
use crate::app_state::AppState;

use tl_core::LinkItem;
use tl_db::LinkProfileRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/profile
///
/// Fetch a profile by accountId or email. A missing profile is an empty
/// result, not an error.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<GetProfileQuery>,
) -> ApiResult<Json<ProfileView>> {
    let repo = LinkProfileRepository::new(state.pool.clone());

    let profile = if let Some(account_id) = query.account_id.filter(|s| !s.is_empty()) {
        repo.find_by_handle(&account_id).await?
    } else if let Some(email) = query.email.filter(|s| !s.is_empty()) {
        repo.find_by_email(&email).await?
    } else {
        return Err(ApiError::Validation {
            message: "accountId or email is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    Ok(Json(ProfileView::from(profile)))
}

/// POST /api/v1/profile/links
///
/// Append a link to the profile, creating the profile on first use. No
/// dedup and no url-shape validation; the same pair may appear twice.
pub async fn add_link(
    State(state): State<AppState>,
    Json(req): Json<AddLinkRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let account_id = require_field("accountId", req.account_id)?;
    let email = require_field("email", req.email)?;
    let title = require_field("title", req.title)?;
    let url = require_field("url", req.url)?;

    let repo = LinkProfileRepository::new(state.pool.clone());

    // Create-if-absent, then append: one code path whether or not the
    // profile already exists.
    repo.upsert(&email, &account_id, req.profile_image.as_deref())
        .await?;
    repo.append_link(&email, &LinkItem::new(title, url)).await?;

    log::info!("Added link for {}", email);

    Ok(Json(MessageResponse {
        message: "Link added successfully".to_string(),
    }))
}

/// DELETE /api/v1/profile/links
///
/// Remove every link whose url matches. Zero matches still succeeds, so
/// the operation is idempotent.
pub async fn delete_link(
    State(state): State<AppState>,
    Query(query): Query<DeleteLinkQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let email = require_field("email", query.email)?;
    let url = require_field("url", query.url)?;

    let repo = LinkProfileRepository::new(state.pool.clone());
    let removed = repo.remove_links_by_url(&email, &url).await?;

    log::info!("Removed {} link(s) for {}", removed, email);

    Ok(Json(MessageResponse {
        message: "Link deleted".to_string(),
    }))
}

/// PUT /api/v1/profile/handle
///
/// Point the profile at a new public handle. A handle owned by a
/// different account fails with 409 and changes nothing.
pub async fn set_handle(
    State(state): State<AppState>,
    Json(req): Json<SetHandleRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let email = require_field("email", req.email)?;
    let new_handle = require_field("newHandle", req.new_handle)?;

    let repo = LinkProfileRepository::new(state.pool.clone());
    repo.set_handle(&email, &new_handle).await?;

    log::info!("Updated handle for {}", email);

    Ok(Json(MessageResponse {
        message: "Handle updated successfully".to_string(),
    }))
}

/// PUT /api/v1/profile/photo
///
/// Create-or-update the profile image by email. The image value is
/// opaque: a URL or an inline-encoded payload, stored verbatim.
pub async fn set_image(
    State(state): State<AppState>,
    Json(req): Json<SetImageRequest>,
) -> ApiResult<Json<UpdateImageResponse>> {
    let email = require_field("email", req.email)?;
    let image = require_field("profileImage", req.profile_image)?;

    let repo = LinkProfileRepository::new(state.pool.clone());
    let profile = repo.set_image(&email, &image).await?;

    log::info!("Updated profile image for {}", email);

    Ok(Json(UpdateImageResponse {
        message: "Profile updated".to_string(),
        profile: profile.into(),
    }))
}

// =============================================================================
// Validation
// =============================================================================

/// Required-field check; empty strings count as missing.
#[track_caller]
fn require_field(name: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::Validation {
            message: format!("{} is required", name),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
