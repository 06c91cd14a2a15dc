//! Flat-directory gallery store
//!
//! This module provides [`GalleryStore`], which performs list, read, write and delete
//! against a single gallery directory.
//!
//! # Behaviour
//!
//! - Every call goes straight to the filesystem; nothing is cached between calls
//! - Listings skip directories and report each file's full name with an empty extension
//! - With atomic writes, listings also skip in-flight `.gallery-upload-*` temporary files
//! - Writes never overwrite: creating a file that already exists fails
//! - Deleting returns the listing taken after the file is gone
//! - All failures surface as [`GalleryError::Io`] unless strict filenames are enabled
//!
//! # Filenames
//!
//! Filenames are appended to the root directory as plain strings. By default no checks
//! are applied, so a filename containing `..` segments can reach outside the root. Set
//! [`StoreOptions::strict_filenames`] to reject such names.
//!
//! # Partial writes
//!
//! By default a write that fails after creating the file leaves whatever was written on
//! disk. With [`StoreOptions::atomic_writes`] the content is written to a temporary file
//! in the root directory and moved into place only once complete.

use crate::filename::validate_filename;
use crate::{GalleryError, GalleryResult};
use gallery_types::{ImageDetails, UploadedPhoto};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Prefix for in-flight temporary files created by atomic writes.
const TEMP_FILE_PREFIX: &str = ".gallery-upload-";

/// Opt-in hardening switches for [`GalleryStore`].
///
/// Both default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject filenames that are empty, contain separators, or are `.`/`..`
    pub strict_filenames: bool,

    /// Write through a temporary file and move it into place without clobbering
    pub atomic_writes: bool,
}

/// Store for images kept as files in one flat directory
///
/// The store holds only its root path and options. It is cheap to clone and safe to
/// share between threads; it performs no locking of its own.
#[derive(Debug, Clone)]
pub struct GalleryStore {
    /// Directory holding the gallery images
    root_directory: PathBuf,

    options: StoreOptions,
}

impl GalleryStore {
    /// Creates a store over `root_directory` with default options.
    ///
    /// The directory is not checked here; a missing root surfaces as an error from the
    /// first operation that touches it.
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self::with_options(root_directory, StoreOptions::default())
    }

    /// Creates a store over `root_directory` with the given options.
    pub fn with_options(root_directory: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            root_directory: root_directory.into(),
            options,
        }
    }

    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    #[must_use]
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Lists the images currently in the gallery directory
    ///
    /// Only direct entries are considered. Entries that are directories (following
    /// symlinks) are skipped; every other entry yields one [`ImageDetails`] whose `name`
    /// is the full filename and whose `extension` is empty. With atomic writes enabled,
    /// in-flight temporary files are skipped too. The order is whatever the platform's
    /// directory enumeration produces.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Io` if the gallery directory cannot be opened or read.
    pub fn list(&self) -> GalleryResult<Vec<ImageDetails>> {
        let entries = fs::read_dir(&self.root_directory).map_err(|e| {
            io_error(
                e,
                format!(
                    "Failed to read gallery directory {}",
                    self.root_directory.display()
                ),
            )
        })?;

        let mut images = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                io_error(
                    e,
                    format!(
                        "Failed to read entry in gallery directory {}",
                        self.root_directory.display()
                    ),
                )
            })?;

            if entry.path().is_dir() {
                continue;
            }

            if self.options.atomic_writes
                && entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(TEMP_FILE_PREFIX)
            {
                continue;
            }

            images.push(ImageDetails::from_filename(
                entry.file_name().to_string_lossy(),
            ));
        }

        tracing::debug!(
            dir = %self.root_directory.display(),
            count = images.len(),
            "Listed gallery images"
        );

        Ok(images)
    }

    /// Reads the whole content of `filename`
    ///
    /// # Arguments
    ///
    /// * `filename` - Stored filename, usually built with
    ///   [`image_filename`](gallery_types::image_filename)
    ///
    /// # Errors
    ///
    /// Returns `GalleryError` if:
    /// - the file does not exist or cannot be read (I/O)
    /// - strict filenames are enabled and `filename` is rejected
    pub fn read(&self, filename: &str) -> GalleryResult<Vec<u8>> {
        let path = self.resolve(filename)?;

        let content = fs::read(&path)
            .map_err(|e| io_error(e, format!("Failed to read image {}", path.display())))?;

        tracing::debug!(path = %path.display(), size_bytes = content.len(), "Read image");

        Ok(content)
    }

    /// Stores an uploaded photo under its original filename
    ///
    /// The file must not exist yet. The whole payload is written in one go.
    ///
    /// # Returns
    ///
    /// An [`ImageDetails`] whose `name` is the original filename and whose `extension`
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError` if:
    /// - a file with that name already exists (I/O, existing content is untouched)
    /// - the file cannot be created or fully written (I/O)
    /// - strict filenames are enabled and the original filename is rejected
    pub fn write(&self, photo: &UploadedPhoto) -> GalleryResult<ImageDetails> {
        let path = self.resolve(&photo.original_filename)?;

        if self.options.atomic_writes {
            self.write_atomic(&path, &photo.content)?;
        } else {
            write_new(&path, &photo.content)?;
        }

        tracing::debug!(
            path = %path.display(),
            size_bytes = photo.content.len(),
            "Stored image"
        );

        Ok(ImageDetails::from_filename(photo.original_filename.clone()))
    }

    /// Deletes `filename` and returns the listing taken afterwards
    ///
    /// # Errors
    ///
    /// Returns `GalleryError` if:
    /// - the file does not exist or cannot be removed (I/O); no listing is taken
    /// - the follow-up listing fails (I/O)
    /// - strict filenames are enabled and `filename` is rejected
    pub fn delete(&self, filename: &str) -> GalleryResult<Vec<ImageDetails>> {
        let path = self.resolve(filename)?;

        fs::remove_file(&path)
            .map_err(|e| io_error(e, format!("Failed to delete image {}", path.display())))?;

        tracing::info!(path = %path.display(), "Deleted image");

        self.list()
    }

    /// Builds the on-disk path for `filename`.
    ///
    /// The filename is appended as a string, so an absolute filename still lands under
    /// the root while `..` segments are left for the filesystem to resolve.
    fn resolve(&self, filename: &str) -> GalleryResult<PathBuf> {
        if self.options.strict_filenames {
            validate_filename(filename)?;
        }

        let mut path = OsString::from(self.root_directory.as_os_str());
        path.push(MAIN_SEPARATOR_STR);
        path.push(filename);
        Ok(PathBuf::from(path))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> GalleryResult<()> {
        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .tempfile_in(&self.root_directory)
            .map_err(|e| {
                io_error(
                    e,
                    format!(
                        "Failed to create temporary file in {}",
                        self.root_directory.display()
                    ),
                )
            })?;

        temp.write_all(content)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| {
                io_error(
                    e,
                    format!("Failed to write temporary file for {}", path.display()),
                )
            })?;

        // The temporary file is removed when the move fails.
        temp.persist_noclobber(path).map_err(|e| {
            io_error(
                e.error,
                format!("Failed to move image into place at {}", path.display()),
            )
        })?;

        Ok(())
    }
}

fn write_new(path: &Path, content: &[u8]) -> GalleryResult<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| io_error(e, format!("Failed to create image {}", path.display())))?;

    file.write_all(content)
        .map_err(|e| io_error(e, format!("Failed to write image {}", path.display())))
}

fn io_error(e: io::Error, context: String) -> GalleryError {
    GalleryError::Io(io::Error::new(e.kind(), format!("{}: {}", context, e)))
}
