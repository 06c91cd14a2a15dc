//! Strict filename checking.
//!
//! Only applied when [`StoreOptions::strict_filenames`](crate::StoreOptions) is set. A
//! strict filename must resolve to an entry directly inside the gallery directory.

use crate::{GalleryError, GalleryResult};
use std::path::{Component, Path};

/// Checks that `filename` names a single entry directly inside the gallery directory.
///
/// # Errors
///
/// Returns `GalleryError::InvalidFilename` if the filename:
/// - is empty
/// - contains `/`, `\` or a NUL byte
/// - is `.` or `..`, or otherwise is not one normal path component
pub fn validate_filename(filename: &str) -> GalleryResult<()> {
    if filename.is_empty() {
        return Err(GalleryError::InvalidFilename(
            "filename cannot be empty".into(),
        ));
    }

    if filename.contains(|c: char| matches!(c, '/' | '\\' | '\0')) {
        return Err(GalleryError::InvalidFilename(format!(
            "filename must not contain path separators: {:?}",
            filename
        )));
    }

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(GalleryError::InvalidFilename(format!(
            "filename must be a plain file name: {:?}",
            filename
        ))),
    }
}
