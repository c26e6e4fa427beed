use crate::{
    abstract_trait::SessionTokenTrait, domain::responses::SessionResponse, errors::ServiceError,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ADMIN_SESSION: &str = "admin_session";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Clone)]
pub struct SessionConfig {
    secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        SessionConfig {
            secret: secret.to_string(),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    fn issue_at(&self, now: DateTime<Utc>) -> Result<SessionResponse, ServiceError> {
        let expires_at = now + self.ttl;

        let claims = SessionClaims {
            sub: "admin".to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
            token_type: ADMIN_SESSION.to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)?;

        Ok(SessionResponse {
            token,
            expires_at: expires_at.to_rfc3339(),
        })
    }
}

impl SessionTokenTrait for SessionConfig {
    fn issue(&self) -> Result<SessionResponse, ServiceError> {
        self.issue_at(Utc::now())
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(err),
            })?;

        if token_data.claims.token_type != ADMIN_SESSION {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims)
    }
}
