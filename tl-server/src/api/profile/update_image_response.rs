use crate::api::profile::profile_dto::ProfileDto;

use serde::Serialize;

/// Image update acknowledgment carrying the resulting profile
#[derive(Debug, Serialize)]
pub struct UpdateImageResponse {
    pub message: String,
    pub profile: ProfileDto,
}
