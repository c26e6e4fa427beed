use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub expires_at: Option<String>,
}
