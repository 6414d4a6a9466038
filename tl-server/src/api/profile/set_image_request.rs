use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetImageRequest {
    /// Owning account email (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar reference: a URL or an inline-encoded payload (required)
    #[serde(default)]
    pub profile_image: Option<String>,
}
