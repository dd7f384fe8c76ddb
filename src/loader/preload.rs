/// Image preloading and load-state tracking
///
/// Fetches image bytes ahead of display need so next/previous usually
/// lands on an already-settled image. A fetch "settles" whether it
/// succeeds or fails: a broken image renders as such instead of leaving
/// the placeholder up forever.

use crate::state::data::ImageRef;
use std::collections::{HashMap, HashSet};
use tokio::task;

/// Tracks, per image, whether its bytes have settled.
///
/// Owned by one gallery instance; no cross-instance sharing. Absence of
/// a key means "not yet loaded". Keys are only ever inserted with
/// `true`, once, and the map lives for the gallery's lifetime — the
/// image set is fixed and small, so there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct Preloader {
    settled: HashMap<ImageRef, bool>,
    in_flight: HashSet<ImageRef>,
}

impl Preloader {
    /// Create an empty tracker
    pub fn new() -> Self {
        Preloader::default()
    }

    /// Whether the image has finished loading (or failing)
    pub fn is_loaded(&self, source: &ImageRef) -> bool {
        self.settled.get(source).copied().unwrap_or(false)
    }

    /// Ask to start fetching an image.
    ///
    /// Returns `true` exactly when the caller should spawn a fetch:
    /// repeated calls before settlement, and calls after settlement,
    /// return `false`. This is what makes preloading idempotent.
    pub fn begin(&mut self, source: &ImageRef) -> bool {
        if self.is_loaded(source) || self.in_flight.contains(source) {
            return false;
        }
        self.in_flight.insert(source.clone());
        true
    }

    /// Record that a fetch finished, successfully or not
    pub fn settle(&mut self, source: ImageRef) {
        self.in_flight.remove(&source);
        self.settled.insert(source, true);
    }

    /// Number of settled images (diagnostics)
    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }
}

/// Fetch one image in the background.
///
/// Reads the bytes off the async filesystem and decodes them on a
/// blocking thread, then resolves to the reference either way — the
/// caller marks it settled regardless of outcome. Failures are logged
/// and otherwise harmless: navigation is never blocked on a fetch.
pub async fn fetch(source: ImageRef) -> ImageRef {
    match tokio::fs::read(source.as_path()).await {
        Ok(bytes) => {
            let decoded = task::spawn_blocking(move || image::load_from_memory(&bytes)).await;
            match decoded {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => eprintln!("⚠️  Failed to decode {source}: {e}"),
                Err(e) => eprintln!("⚠️  Preload task failed for {source}: {e}"),
            }
        }
        Err(e) => eprintln!("⚠️  Failed to read {source}: {e}"),
    }

    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_means_not_loaded() {
        let preloader = Preloader::new();
        assert!(!preloader.is_loaded(&"a.jpg".into()));
    }

    #[test]
    fn test_begin_is_idempotent_before_settlement() {
        let mut preloader = Preloader::new();
        let source: ImageRef = "a.jpg".into();

        // Only the first request starts a fetch
        assert!(preloader.begin(&source));
        assert!(!preloader.begin(&source));
        assert!(!preloader.is_loaded(&source));

        preloader.settle(source.clone());
        assert!(preloader.is_loaded(&source));
        assert_eq!(preloader.settled_count(), 1);

        // Settled images are never fetched again
        assert!(!preloader.begin(&source));
        assert_eq!(preloader.settled_count(), 1);
    }

    #[test]
    fn test_independent_images_track_independently() {
        let mut preloader = Preloader::new();
        assert!(preloader.begin(&"a.jpg".into()));
        assert!(preloader.begin(&"b.jpg".into()));

        preloader.settle("a.jpg".into());
        assert!(preloader.is_loaded(&"a.jpg".into()));
        assert!(!preloader.is_loaded(&"b.jpg".into()));
    }

    #[tokio::test]
    async fn test_fetch_settles_on_missing_file() {
        // Failure still resolves to the ref so the caller can settle it
        let source: ImageRef = "/nonexistent/image.jpg".into();
        let settled = fetch(source.clone()).await;
        assert_eq!(settled, source);
    }

    #[tokio::test]
    async fn test_fetch_settles_on_undecodable_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        let source = ImageRef::from(path);
        let settled = fetch(source.clone()).await;
        assert_eq!(settled, source);
    }
}
