use tl_core::LinkItem;

use serde::Serialize;

/// Link item DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct LinkDto {
    pub title: String,
    pub url: String,
}

impl From<LinkItem> for LinkDto {
    fn from(item: LinkItem) -> Self {
        Self {
            title: item.title,
            url: item.url,
        }
    }
}
