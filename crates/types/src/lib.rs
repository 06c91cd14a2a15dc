//! Shared gallery types.
//!
//! Used by the gallery store, the REST adapter and the CLI.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An image known to the gallery.
///
/// The gallery reports the full filename in `name` and leaves `extension` empty for both
/// listings and uploads. Only lookups (read/delete) take the two halves separately, see
/// [`image_filename`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageDetails {
    /// Filename of the image, including any extension.
    #[serde(rename = "imageName")]
    pub name: String,

    /// File extension. Empty for every record the gallery produces.
    #[serde(rename = "fileExtension")]
    pub extension: String,
}

impl ImageDetails {
    /// Creates a record for `name` with an empty extension.
    pub fn from_filename(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: String::new(),
        }
    }
}

/// A photo handed to the gallery for storage.
///
/// The original filename is used verbatim as the stored filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    pub original_filename: String,
    pub content: Vec<u8>,
}

impl UploadedPhoto {
    pub fn new(original_filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            original_filename: original_filename.into(),
            content: content.into(),
        }
    }
}

/// Joins a lookup name and extension into the stored filename.
///
/// The halves are concatenated with a literal `.` and nothing else; no validation is
/// applied here.
pub fn image_filename(name: &str, extension: &str) -> String {
    format!("{}.{}", name, extension)
}
