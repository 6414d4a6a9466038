use crate::api::profile::link_dto::LinkDto;

use tl_core::LinkProfile;

use serde::Serialize;

/// Full profile DTO returned by the image update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub email: String,
    pub account_id: String,
    pub profile_image: String,
    pub links: Vec<LinkDto>,
}

impl From<LinkProfile> for ProfileDto {
    fn from(p: LinkProfile) -> Self {
        Self {
            email: p.email,
            account_id: p.handle.unwrap_or_default(),
            profile_image: p.profile_image.unwrap_or_default(),
            links: p.links.into_iter().map(LinkDto::from).collect(),
        }
    }
}
