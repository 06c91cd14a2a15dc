//! Constants used throughout the gallery core crate.
//!
//! Defaults for startup configuration live here so the runner and the CLI agree.

/// Default directory for gallery images when no explicit directory is configured.
pub const DEFAULT_GALLERY_DIR: &str = "uploads";

/// Default bind address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// Default request body limit for uploads (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
