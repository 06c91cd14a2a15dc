//! Gallery server binary.
//!
//! Resolves configuration once from the environment, then serves the gallery REST API.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use gallery_core::config::{
    bool_from_env_value, gallery_dir_from_env_value, max_upload_bytes_from_env_value,
    rest_addr_from_env_value, validate_gallery_dir,
};
use gallery_core::GalleryConfig;
use gallery_files::StoreOptions;

/// Main entry point for the gallery server
///
/// # Environment Variables
/// - `GALLERY_DIR`: Directory holding the images (default: "uploads"); must exist
/// - `GALLERY_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `GALLERY_MAX_UPLOAD_BYTES`: Request body limit for uploads (default: 10 MiB)
/// - `GALLERY_STRICT_FILENAMES`: Reject filenames that could leave the gallery directory
/// - `GALLERY_ATOMIC_WRITES`: Write uploads through a temporary file
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is malformed,
/// - the gallery directory does not exist,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gallery_run=info".parse()?)
                .add_directive("gallery_files=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gallery_dir = gallery_dir_from_env_value(std::env::var("GALLERY_DIR").ok());
    validate_gallery_dir(&gallery_dir)?;

    let store_options = StoreOptions {
        strict_filenames: bool_from_env_value(
            "GALLERY_STRICT_FILENAMES",
            std::env::var("GALLERY_STRICT_FILENAMES").ok(),
        )?,
        atomic_writes: bool_from_env_value(
            "GALLERY_ATOMIC_WRITES",
            std::env::var("GALLERY_ATOMIC_WRITES").ok(),
        )?,
    };

    let cfg = GalleryConfig::new(
        gallery_dir,
        rest_addr_from_env_value(std::env::var("GALLERY_REST_ADDR").ok())?,
        max_upload_bytes_from_env_value(std::env::var("GALLERY_MAX_UPLOAD_BYTES").ok())?,
        store_options,
    )?;

    tracing::info!(
        dir = %cfg.gallery_dir().display(),
        strict_filenames = store_options.strict_filenames,
        atomic_writes = store_options.atomic_writes,
        "-- Serving gallery"
    );
    tracing::info!("-- Starting gallery REST API on {}", cfg.rest_addr());

    let app = api_rest::router(AppState::new(cfg.store()), cfg.max_upload_bytes());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
