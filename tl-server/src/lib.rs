pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    profile::{
        add_link_request::AddLinkRequest,
        delete_link_query::DeleteLinkQuery,
        get_profile_query::GetProfileQuery,
        link_dto::LinkDto,
        message_response::MessageResponse,
        profile::{add_link, delete_link, get_profile, set_handle, set_image},
        profile_dto::ProfileDto,
        profile_view::ProfileView,
        set_handle_request::SetHandleRequest,
        set_image_request::SetImageRequest,
        update_image_response::UpdateImageResponse,
    },
    public::public::resolve_profile,
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
