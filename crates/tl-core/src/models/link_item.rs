use serde::{Deserialize, Serialize};

/// A single title/URL pair displayed on a profile page.
/// Items have no identity beyond the pair itself; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
}

impl LinkItem {
    pub fn new(title: String, url: String) -> Self {
        Self { title, url }
    }
}
