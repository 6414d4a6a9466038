use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLinkRequest {
    /// Public identifier claimed at first link creation (required)
    #[serde(default)]
    pub account_id: Option<String>,

    /// Owning account email (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Link title (required)
    #[serde(default)]
    pub title: Option<String>,

    /// Link target; stored verbatim, shape is not validated (required)
    #[serde(default)]
    pub url: Option<String>,

    /// Optional avatar reference, used only when the profile is created
    #[serde(default)]
    pub profile_image: Option<String>,
}
