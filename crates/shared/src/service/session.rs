use crate::{
    abstract_trait::{DynSessionToken, SessionServiceTrait},
    config::SessionClaims,
    domain::{
        requests::LoginRequest,
        responses::{SessionResponse, SessionStatusResponse},
    },
    errors::ServiceError,
};
use chrono::DateTime;
use tracing::{info, warn};

/// Exchanges the admin password for a signed session token.
pub struct SessionService {
    password: String,
    tokens: DynSessionToken,
}

impl SessionService {
    pub fn new(password: impl Into<String>, tokens: DynSessionToken) -> Self {
        Self {
            password: password.into(),
            tokens,
        }
    }
}

impl SessionServiceTrait for SessionService {
    fn login(&self, req: &LoginRequest) -> Result<SessionResponse, ServiceError> {
        if req.password.is_empty() || req.password != self.password {
            warn!("🔒 Admin login rejected");
            return Err(ServiceError::InvalidCredentials);
        }

        let session = self.tokens.issue()?;
        info!("🔑 Admin session issued, expires at {}", session.expires_at);
        Ok(session)
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, ServiceError> {
        self.tokens.verify(token)
    }

    fn status(&self, token: Option<&str>) -> SessionStatusResponse {
        let claims = token.and_then(|t| self.tokens.verify(t).ok());

        SessionStatusResponse {
            authenticated: claims.is_some(),
            expires_at: claims
                .and_then(|c| DateTime::from_timestamp(c.exp as i64, 0))
                .map(|exp| exp.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use std::sync::Arc;

    fn service() -> SessionService {
        SessionService::new(
            "hunter2",
            Arc::new(SessionConfig::new("test-secret", 60)),
        )
    }

    #[test]
    fn correct_password_issues_a_verifiable_token() {
        let service = service();

        let session = service
            .login(&LoginRequest {
                password: "hunter2".into(),
            })
            .unwrap();

        assert!(service.verify(&session.token).is_ok());
        let status = service.status(Some(&session.token));
        assert!(status.authenticated);
        assert!(status.expires_at.is_some());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let err = service()
            .login(&LoginRequest {
                password: "hunter3".into(),
            })
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[test]
    fn status_without_token_is_unauthenticated() {
        let service = service();

        assert!(!service.status(None).authenticated);
        assert!(!service.status(Some("not-a-jwt")).authenticated);
    }
}
