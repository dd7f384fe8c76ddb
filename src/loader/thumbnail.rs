/// Thumbnail generation and disk cache
///
/// The grid shows small thumbnails instead of decoding full images.
/// Thumbnails are generated once, saved as JPEG in the user's cache
/// directory, and reused on later runs.

use crate::state::data::ImageRef;
use image::imageops::FilterType;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tokio::task;

/// Size of generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/gallery-lightbox/thumbnails on Linux
pub fn cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .expect("Could not determine cache directory");

    path.push("gallery-lightbox");
    path.push("thumbnails");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create thumbnail cache directory");

    path
}

/// Stable cache filename for a source image.
///
/// Keyed by a hash of the source path so two galleries sharing a cache
/// directory cannot collide on basenames.
pub fn cache_key(source: &ImageRef) -> String {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    format!("{:016x}.jpg", hasher.finish())
}

/// Generate (or reuse) a thumbnail for a source image.
///
/// Runs the decode and resize on a blocking thread. Returns the source
/// alongside the cached path, or `None` when generation failed — the
/// grid keeps its placeholder tile in that case.
pub async fn generate(source: ImageRef) -> (ImageRef, Option<PathBuf>) {
    let dir = cache_dir();
    let result = {
        let source = source.clone();
        task::spawn_blocking(move || generate_blocking(&source, &dir)).await
    };

    match result {
        Ok(path) => (source, path),
        Err(e) => {
            eprintln!("⚠️  Thumbnail task failed for {source}: {e}");
            (source, None)
        }
    }
}

/// Blocking implementation of thumbnail generation
fn generate_blocking(source: &ImageRef, cache_dir: &Path) -> Option<PathBuf> {
    let thumbnail_path = cache_dir.join(cache_key(source));

    // Reuse a previously generated thumbnail
    if thumbnail_path.exists() {
        return Some(thumbnail_path);
    }

    let img = match image::open(source.as_path()) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("⚠️  Failed to open {source} for thumbnailing: {e}");
            return None;
        }
    };

    // JPEG has no alpha channel, so flatten before saving
    let thumbnail = img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .to_rgb8();

    if let Err(e) = thumbnail.save(&thumbnail_path) {
        eprintln!("⚠️  Failed to save thumbnail for {source}: {e}");
        return None;
    }

    Some(thumbnail_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn create_test_image(dir: &Path, name: &str, width: u32, height: u32) -> ImageRef {
        let path = dir.join(name);
        RgbaImage::new(width, height)
            .save(&path)
            .expect("failed to write test image");
        ImageRef::from(path)
    }

    #[test]
    fn test_cache_keys_are_stable_and_distinct() {
        let a: ImageRef = "/images/gallery1.jpg".into();
        let b: ImageRef = "/images/gallery2.jpg".into();

        assert_eq!(cache_key(&a), cache_key(&a));
        assert_ne!(cache_key(&a), cache_key(&b));
        assert!(cache_key(&a).ends_with(".jpg"));
    }

    #[test]
    fn test_generate_resizes_and_caches() {
        let src_dir = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let source = create_test_image(src_dir.path(), "big.png", 512, 512);

        let path = generate_blocking(&source, cache.path()).expect("thumbnail failed");
        assert!(path.exists());

        let thumb = image::open(&path).unwrap();
        assert!(thumb.width() <= THUMBNAIL_SIZE);
        assert!(thumb.height() <= THUMBNAIL_SIZE);

        // Second call reuses the cached file
        let again = generate_blocking(&source, cache.path()).unwrap();
        assert_eq!(path, again);
    }

    #[test]
    fn test_generate_fails_cleanly_on_unreadable_source() {
        let cache = tempfile::tempdir().unwrap();
        let source: ImageRef = "/nonexistent/photo.jpg".into();
        assert_eq!(generate_blocking(&source, cache.path()), None);
    }
}
