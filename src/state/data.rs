/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the manifest layer and the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque identifier for a displayable image.
///
/// Treated as a lookup key and as the thing to render; the rest of the
/// application assumes nothing about its structure beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// View the reference as a filesystem path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        ImageRef(s.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        ImageRef(s)
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        ImageRef(path.to_string_lossy().into_owned())
    }
}

/// Represents a single image in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Where the image bytes live (file path)
    pub source: ImageRef,
    /// Optional caption shown under the image in the lightbox
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Optional capture date shown next to the caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_on: Option<NaiveDate>,
}

impl GalleryImage {
    /// Create an entry with no caption or date
    pub fn from_source(source: impl Into<ImageRef>) -> Self {
        GalleryImage {
            source: source.into(),
            caption: None,
            captured_on: None,
        }
    }
}
