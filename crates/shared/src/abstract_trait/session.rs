use crate::{
    config::SessionClaims,
    domain::{
        requests::LoginRequest,
        responses::{SessionResponse, SessionStatusResponse},
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynSessionToken = Arc<dyn SessionTokenTrait + Send + Sync>;
pub type DynSessionService = Arc<dyn SessionServiceTrait + Send + Sync>;

pub trait SessionTokenTrait {
    fn issue(&self) -> Result<SessionResponse, ServiceError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, ServiceError>;
}

pub trait SessionServiceTrait {
    fn login(&self, req: &LoginRequest) -> Result<SessionResponse, ServiceError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, ServiceError>;
    fn status(&self, token: Option<&str>) -> SessionStatusResponse;
}
