use serde::Deserialize;

/// Selector for profile lookup. `accountId` wins when both are present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProfileQuery {
    #[serde(default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}
