/// Background resource loading module
///
/// This module handles everything that touches the filesystem:
/// - Preloading image bytes and tracking settlement (preload.rs)
/// - Generating and caching grid thumbnails (thumbnail.rs)
/// - Manifest persistence and folder import (manifest.rs)

pub mod manifest;
pub mod preload;
pub mod thumbnail;
