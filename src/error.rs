/// Error types for the gallery application
///
/// All variants carry owned, cloneable payloads so errors can travel inside
/// iced messages and be compared in tests.

use crate::state::data::ImageRef;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    /// An index-based lookup was attempted on an empty gallery.
    /// Non-empty galleries never produce this: indices wrap around.
    #[error("the gallery is empty")]
    OutOfRange,

    /// An image reference is not a member of the gallery.
    /// Indicates a wiring bug between the grid and the registry,
    /// so it is surfaced to the caller rather than swallowed.
    #[error("image '{0}' is not part of this gallery")]
    NotFound(ImageRef),

    /// The gallery manifest could not be read or parsed
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Filesystem-level failure
    #[error("I/O error: {0}")]
    Io(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GalleryError>;

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        GalleryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Manifest(err.to_string())
    }
}
