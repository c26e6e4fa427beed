use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::warn;

pub const SESSION_COOKIE: &str = "session";

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Bearer token first, then the `session` cookie.
pub fn session_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    bearer_token(headers)
        .map(str::to_owned)
        .or_else(|| jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()))
}

fn authorize(
    state: &AppState,
    static_key: &str,
    headers: &HeaderMap,
    jar: &CookieJar,
) -> Result<(), HttpError> {
    if !static_key.is_empty() && bearer_token(headers).is_some_and(|token| token == static_key) {
        return Ok(());
    }

    let Some(token) = session_token(headers, jar) else {
        return Err(HttpError::Unauthorized("Unauthorized".into()));
    };

    state
        .di_container
        .session
        .verify(&token)
        .map(|_| ())
        .map_err(|err| {
            warn!("🔒 Rejected admin request: {err}");
            HttpError::Unauthorized("Unauthorized".into())
        })
}

/// Guards product mutations: `Bearer <ADMIN_API_KEY>` or an admin session.
pub async fn require_product_admin(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    authorize(&state, &state.admin.product_key, req.headers(), &jar)?;
    Ok(next.run(req).await)
}

/// Guards uploads: `Bearer <ADMIN_UPLOAD_KEY>` or an admin session.
pub async fn require_upload_admin(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    authorize(&state, &state.admin.upload_key, req.headers(), &jar)?;
    Ok(next.run(req).await)
}
