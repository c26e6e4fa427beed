use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Admin login. A missing password deserializes as empty and is refused
/// as bad credentials rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}
