//! Link profile entity - the per-account record.

use crate::LinkItem;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full per-account record: public handle, optional avatar reference,
/// and the ordered link items. Keyed by the owning account's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkProfile {
    pub email: String,
    /// Public identifier used in shareable URLs. Unique across profiles;
    /// absent until the account claims one.
    pub handle: Option<String>,
    /// Opaque avatar reference (URL or inline-encoded payload), stored verbatim.
    pub profile_image: Option<String>,
    /// Insertion order is display order.
    pub links: Vec<LinkItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkProfile {
    /// Create a new profile with an empty link list.
    pub fn new(email: String, handle: Option<String>, profile_image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            email,
            handle,
            profile_image,
            links: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the profile has claimed a public handle
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }
}
