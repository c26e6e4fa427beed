use crate::{
    middleware::{auth::require_upload_admin, extract::MultipartForm},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Multipart},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::post,
};
use shared::{
    abstract_trait::DynMediaService,
    domain::{requests::UploadFile, responses::UploadResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

struct UploadForm {
    file: Option<UploadFile>,
    public_id: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, HttpError> {
    let mut form = UploadForm {
        file: None,
        public_id: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Failed to read file: {e}")))?;

                if !bytes.is_empty() {
                    form.file = Some(UploadFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            Some("public_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Invalid public_id: {e}")))?;
                form.public_id = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "`file` field with the image"),
    responses(
        (status = 200, description = "Image stored on the media host", body = UploadResponse),
        (status = 400, description = "No file provided", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
pub async fn upload_image(
    Extension(service): Extension<DynMediaService>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse, HttpError> {
    let form = read_form(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| HttpError::BadRequest("No file provided".into()))?;

    let response = service.upload_image(file).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/upload",
    tag = "Upload",
    security(("bearer_auth" = [])),
    request_body(
        content_type = "multipart/form-data",
        description = "`file` field with the new image, optional `public_id` of the image it replaces"
    ),
    responses(
        (status = 200, description = "Image replaced; `previous_deleted` reports the old asset", body = UploadResponse),
        (status = 400, description = "No file provided", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
pub async fn replace_image(
    Extension(service): Extension<DynMediaService>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse, HttpError> {
    let form = read_form(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| HttpError::BadRequest("No file provided".into()))?;

    info!(
        "🖼️ Replacing image {}",
        form.public_id.as_deref().unwrap_or("<none>")
    );

    let response = service.replace_image(file, form.public_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn upload_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/upload", post(upload_image).put(replace_image))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_upload_admin,
        ))
        .layer(Extension(app_state.di_container.media.clone()))
}
