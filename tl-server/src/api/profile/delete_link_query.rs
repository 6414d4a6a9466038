use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLinkQuery {
    /// Owning account email (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Url to remove; every matching item is deleted (required)
    #[serde(default)]
    pub url: Option<String>,
}
