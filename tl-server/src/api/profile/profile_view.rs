use crate::api::profile::link_dto::LinkDto;

use tl_core::LinkProfile;

use serde::Serialize;

/// The public profile shape: links, accountId, profileImage.
///
/// A missing profile serializes as empty fields, never as an error, so
/// callers can distinguish "no profile yet" from a transport failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub links: Vec<LinkDto>,
    pub account_id: String,
    pub profile_image: String,
}

impl From<Option<LinkProfile>> for ProfileView {
    fn from(profile: Option<LinkProfile>) -> Self {
        match profile {
            Some(p) => Self {
                links: p.links.into_iter().map(LinkDto::from).collect(),
                account_id: p.handle.unwrap_or_default(),
                profile_image: p.profile_image.unwrap_or_default(),
            },
            None => Self {
                links: Vec::new(),
                account_id: String::new(),
                profile_image: String::new(),
            },
        }
    }
}
