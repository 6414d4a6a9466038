use serde::Serialize;

/// Plain acknowledgment for mutating operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
