//! # Gallery Core
//!
//! Startup configuration for the remote gallery.
//!
//! This crate resolves where the gallery lives and how it is served:
//! - Gallery directory, REST bind address and upload size limit
//! - Opt-in store hardening (strict filenames, atomic writes)
//!
//! **No API concerns**: HTTP routing and status mapping belong in `api-rest`; filesystem
//! access belongs in `gallery_files`.

pub mod config;
pub mod constants;
mod error;

pub use config::GalleryConfig;
pub use constants::{DEFAULT_GALLERY_DIR, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REST_ADDR};
pub use error::{ConfigError, ConfigResult};
