use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UploadResponse {
    pub url: String,
    pub public_id: String,
    /// Set on replace only: whether the previous asset was removed from the
    /// media host after the new upload succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_deleted: Option<bool>,
}
