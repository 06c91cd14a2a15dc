//! Gallery file storage
//!
//! This crate maps gallery image names onto files in a single flat directory.
//!
//! ## Storage Model
//!
//! - One root directory, fixed when the store is created
//! - Each file's name is its full identifier; there is no index or metadata file
//! - Listings are derived from the directory contents on every call
//! - Stored bytes are opaque and returned verbatim
//!
//! ```text
//! <gallery_dir>/
//! ├── cat.jpg
//! ├── dog.png
//! └── archive/      # subdirectories are never listed
//! ```
//!
//! The store performs no locking. Concurrent writers and deleters race at the filesystem.
//!
//! ## Example Usage
//!
//! ```no_run
//! use gallery_files::GalleryStore;
//! use gallery_types::image_filename;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = GalleryStore::new("uploads");
//!
//! for image in store.list()? {
//!     println!("{}", image.name);
//! }
//!
//! let bytes = store.read(&image_filename("cat", "jpg"))?;
//! # Ok(())
//! # }
//! ```

mod filename;
mod store;

pub use filename::validate_filename;
pub use store::{GalleryStore, StoreOptions};

/// Errors that can occur during gallery operations
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Any filesystem failure: missing file or directory, permission denied, the target
    /// already existing on write, or a write that could not complete.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filename rejected by strict filename checking
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
