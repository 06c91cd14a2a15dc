//! # API REST
//!
//! REST API implementation for the remote gallery.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, multipart uploads, CORS, body limits)
//!
//! Uses `api-shared` for common types and `gallery_files` for storage.

#![warn(rust_2018_idioms)]

pub mod gallery;

use api_shared::{HealthRes, HealthService, ImageDetails};
use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
    Router,
};
use gallery_files::GalleryStore;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use gallery::{ImageKey, DEFAULT_IMAGE_CONTENT_TYPE, PHOTO_FIELD_NAME};

/// Application state for the REST API
///
/// Holds the gallery store shared by every handler. The store is cheap to clone and
/// carries no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub store: GalleryStore,
}

impl AppState {
    pub fn new(store: GalleryStore) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        gallery::list_images,
        gallery::get_image,
        gallery::upload_photo,
        gallery::delete_image,
    ),
    components(schemas(HealthRes, ImageDetails, gallery::UploadForm))
)]
pub struct ApiDoc;

/// Build the gallery router
///
/// Routes:
/// - `GET /health`
/// - `GET /gallery`, `DELETE /gallery?name=&extension=`
/// - `GET /gallery/photo?name=&extension=`
/// - `POST /gallery/upload` (multipart, `photo` file part)
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
///
/// # Arguments
/// * `state` - Shared application state
/// * `max_upload_bytes` - Request body limit applied to uploads
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/gallery",
            get(gallery::list_images).delete(gallery::delete_image),
        )
        .route("/gallery/photo", get(gallery::get_image))
        .route("/gallery/upload", post(gallery::upload_photo))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the gallery service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}
