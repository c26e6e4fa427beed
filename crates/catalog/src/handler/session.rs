use crate::{
    middleware::{
        auth::{SESSION_COOKIE, session_token},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::DynSessionService,
    domain::{
        requests::LoginRequest,
        responses::{SessionResponse, SessionStatusResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

#[utoipa::path(
    post,
    path = "/api/admin/session",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued; also set as an HttpOnly cookie", body = SessionResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse)
    )
)]
pub async fn login(
    Extension(service): Extension<DynSessionService>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let session = service.login(&body)?;
    let jar = jar.add(session_cookie(session.token.clone()));
    Ok((StatusCode::OK, jar, Json(session)))
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = SessionStatusResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    )
)]
pub async fn session_status(
    Extension(service): Extension<DynSessionService>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    let token = session_token(&headers, &jar);
    let status = service.status(token.as_deref());

    if !status.authenticated {
        return Err(HttpError::Unauthorized("Unauthorized".into()));
    }
    Ok((StatusCode::OK, Json(status)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/session",
    tag = "Session",
    responses(
        (status = 200, description = "Session cookie cleared", body = SessionStatusResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(session_cookie(String::new()));
    let status = SessionStatusResponse {
        authenticated: false,
        expires_at: None,
    };
    (StatusCode::OK, jar, Json(status))
}

pub fn session_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/admin/session",
            post(login).get(session_status).delete(logout),
        )
        .layer(Extension(app_state.di_container.session.clone()))
}
