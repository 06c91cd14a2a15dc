//! Gallery endpoints.
//!
//! Each handler makes exactly one store call, run on tokio's blocking thread pool. Store
//! failures are logged and collapsed to a fixed status and message per endpoint; the cause
//! is never exposed to the client.

use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use gallery_files::{GalleryError, GalleryResult};
use gallery_types::{image_filename, ImageDetails, UploadedPhoto};
use serde::Deserialize;
use std::io;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Multipart form field carrying the uploaded photo.
pub const PHOTO_FIELD_NAME: &str = "photo";

/// Content type reported when the stored bytes are not a recognised format.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

type ApiError = (StatusCode, &'static str);

const LIST_FAILED: ApiError = (StatusCode::NOT_FOUND, "Fail to retrieve the photo list");
const READ_FAILED: ApiError = (StatusCode::NOT_FOUND, "Fail to retrieve the photo");
const UPLOAD_FAILED: ApiError = (StatusCode::EXPECTATION_FAILED, "Fail to upload the photo");
const DELETE_FAILED: ApiError = (StatusCode::BAD_REQUEST, "Fail to delete the photo");

/// Identifies a stored image by its name and extension.
///
/// The stored filename is `name + "." + extension`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageKey {
    /// Filename without the extension
    pub name: String,
    /// Extension without the leading dot
    pub extension: String,
}

impl ImageKey {
    pub fn filename(&self) -> String {
        image_filename(&self.name, &self.extension)
    }
}

/// Multipart upload form, for the OpenAPI document only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    photo: Vec<u8>,
}

#[utoipa::path(
    get,
    path = "/gallery",
    responses(
        (status = 200, description = "Images in the gallery", body = [ImageDetails]),
        (status = 404, description = "Gallery directory cannot be read")
    )
)]
/// List all images in the gallery
///
/// # Errors
/// Returns `404 Not Found` if the gallery directory cannot be read.
#[axum::debug_handler]
pub async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<ImageDetails>>, ApiError> {
    let store = state.store.clone();
    match blocking(move || store.list()).await {
        Ok(images) => Ok(Json(images)),
        Err(e) => {
            tracing::error!("List images error: {:?}", e);
            Err(LIST_FAILED)
        }
    }
}

#[utoipa::path(
    get,
    path = "/gallery/photo",
    params(ImageKey),
    responses(
        (status = 200, description = "Raw image bytes"),
        (status = 400, description = "Missing name or extension"),
        (status = 404, description = "Image not found or unreadable")
    )
)]
/// Fetch the raw bytes of one image
///
/// The `Content-Type` is detected from the stored bytes, falling back to `image/jpeg`.
///
/// # Errors
/// Returns `404 Not Found` if the image does not exist or cannot be read.
#[axum::debug_handler]
pub async fn get_image(
    State(state): State<AppState>,
    Query(key): Query<ImageKey>,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    let filename = key.filename();
    match blocking(move || store.read(&filename)).await {
        Ok(content) => {
            let content_type = infer::get(&content)
                .map(|kind| kind.mime_type())
                .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE);
            Ok(([(header::CONTENT_TYPE, content_type)], content).into_response())
        }
        Err(e) => {
            tracing::error!("Read image error: {:?}", e);
            Err(READ_FAILED)
        }
    }
}

#[utoipa::path(
    post,
    path = "/gallery/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = ImageDetails),
        (status = 417, description = "Upload missing, unreadable, or name already taken")
    )
)]
/// Upload a new image
///
/// The `photo` file part is stored under its original filename.
///
/// # Errors
/// Returns `417 Expectation Failed` if:
/// - the request is not a readable multipart form,
/// - there is no `photo` file part, or
/// - the image cannot be stored (for example because the name is taken).
#[axum::debug_handler]
pub async fn upload_photo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageDetails>, ApiError> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::error!("Upload photo error: {:?}", e);
            return Err(UPLOAD_FAILED);
        }
    };

    let photo = match read_photo(multipart).await {
        Ok(Some(photo)) => photo,
        Ok(None) => {
            tracing::error!(
                "Upload photo error: no '{}' file part in request",
                PHOTO_FIELD_NAME
            );
            return Err(UPLOAD_FAILED);
        }
        Err(e) => {
            tracing::error!("Upload photo error: {:?}", e);
            return Err(UPLOAD_FAILED);
        }
    };

    let store = state.store.clone();
    match blocking(move || store.write(&photo)).await {
        Ok(details) => Ok(Json(details)),
        Err(e) => {
            tracing::error!("Upload photo error: {:?}", e);
            Err(UPLOAD_FAILED)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/gallery",
    params(ImageKey),
    responses(
        (status = 200, description = "Images remaining after the delete", body = [ImageDetails]),
        (status = 400, description = "Image missing or cannot be removed")
    )
)]
/// Delete one image and return the remaining listing
///
/// # Errors
/// Returns `400 Bad Request` if the image does not exist or cannot be removed.
#[axum::debug_handler]
pub async fn delete_image(
    State(state): State<AppState>,
    Query(key): Query<ImageKey>,
) -> Result<Json<Vec<ImageDetails>>, ApiError> {
    let store = state.store.clone();
    let filename = key.filename();
    match blocking(move || store.delete(&filename)).await {
        Ok(images) => Ok(Json(images)),
        Err(e) => {
            tracing::error!("Delete image error: {:?}", e);
            Err(DELETE_FAILED)
        }
    }
}

/// Runs a synchronous store call on the blocking thread pool.
///
/// A call that panics surfaces as `GalleryError::Io`.
async fn blocking<T, F>(call: F) -> GalleryResult<T>
where
    F: FnOnce() -> GalleryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| GalleryError::Io(io::Error::new(io::ErrorKind::Other, e)))?
}

/// Pulls the `photo` file part out of the form.
///
/// Returns `None` when the form has no `photo` part or the part carries no filename.
async fn read_photo(mut multipart: Multipart) -> Result<Option<UploadedPhoto>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD_NAME) {
            continue;
        }

        let Some(original_filename) = field.file_name().map(str::to_owned) else {
            return Ok(None);
        };
        let content = field.bytes().await?;

        return Ok(Some(UploadedPhoto::new(original_filename, content.to_vec())));
    }

    Ok(None)
}
