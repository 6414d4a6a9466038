use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHandleRequest {
    /// Owning account email (required)
    #[serde(default)]
    pub email: Option<String>,

    /// New public handle (required)
    #[serde(default)]
    pub new_handle: Option<String>,
}
