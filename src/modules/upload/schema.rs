use serde::{Deserialize, Serialize};

/// Body returned by the backend after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub image_url: Option<String>,
}
