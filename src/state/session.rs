/// Lightbox viewer session state machine
///
/// Two states: closed, or open on a specific registry index. All
/// transitions recompute the index from the image identifier (or vice
/// versa) through the registry, so index and identifier can never drift
/// apart while the viewer is open.

use crate::error::Result;
use crate::state::data::{GalleryImage, ImageRef};
use crate::state::registry::ImageSet;

/// Open/closed state of the lightbox viewer.
///
/// `current` is `None` while closed and always a valid registry index
/// while open. Navigation while closed is a no-op; only `select` can
/// open the viewer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerSession {
    current: Option<usize>,
}

impl ViewerSession {
    /// Create a session in the closed state
    pub fn new() -> Self {
        ViewerSession { current: None }
    }

    /// Whether the lightbox is currently open
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The current registry index, if open
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The currently displayed image, if open
    pub fn current<'a>(&self, images: &'a ImageSet) -> Option<&'a GalleryImage> {
        let idx = self.current?;
        images.get(idx as i64).ok()
    }

    /// Open the viewer on the given image (or jump to it while open).
    ///
    /// Returns the new index. An unknown reference leaves the session
    /// exactly as it was and reports the error to the caller.
    pub fn select(&mut self, images: &ImageSet, source: &ImageRef) -> Result<usize> {
        let idx = images.index_of(source)?;
        self.current = Some(idx);
        Ok(idx)
    }

    /// Advance to the next image, wrapping at the end.
    ///
    /// Returns the new index, or `None` when the viewer is closed.
    pub fn next(&mut self, images: &ImageSet) -> Option<usize> {
        self.step(images, 1)
    }

    /// Go back to the previous image, wrapping at the start.
    ///
    /// Returns the new index, or `None` when the viewer is closed.
    pub fn previous(&mut self, images: &ImageSet) -> Option<usize> {
        self.step(images, -1)
    }

    /// Close the viewer
    pub fn close(&mut self) {
        self.current = None;
    }

    fn step(&mut self, images: &ImageSet, delta: i64) -> Option<usize> {
        let current = self.current?;
        // Wraparound happens in the registry, not here
        let idx = images.normalize(current as i64 + delta).ok()?;
        self.current = Some(idx);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::state::data::GalleryImage;

    fn abc() -> ImageSet {
        ImageSet::new(vec![
            GalleryImage::from_source("a.jpg"),
            GalleryImage::from_source("b.jpg"),
            GalleryImage::from_source("c.jpg"),
        ])
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = ViewerSession::new();
        assert!(!session.is_open());
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn test_select_then_navigate_with_wraparound() {
        // Registry [A, B, C]: select(B) -> 1, next -> 2, next -> 0 (wrap),
        // previous -> 2 (wrap).
        let images = abc();
        let mut session = ViewerSession::new();

        assert_eq!(session.select(&images, &"b.jpg".into()).unwrap(), 1);
        assert_eq!(session.next(&images), Some(2));
        assert_eq!(session.next(&images), Some(0));
        assert_eq!(session.previous(&images), Some(2));
    }

    #[test]
    fn test_select_unknown_image_reports_and_stays_closed() {
        let images = abc();
        let mut session = ViewerSession::new();

        let err = session.select(&images, &"z.jpg".into()).unwrap_err();
        assert_eq!(err, GalleryError::NotFound("z.jpg".into()));
        assert!(!session.is_open());
    }

    #[test]
    fn test_jump_while_open_keeps_prior_state_on_error() {
        let images = abc();
        let mut session = ViewerSession::new();
        session.select(&images, &"c.jpg".into()).unwrap();

        assert!(session.select(&images, &"z.jpg".into()).is_err());
        assert_eq!(session.current_index(), Some(2));
    }

    #[test]
    fn test_next_and_previous_are_mutual_inverses() {
        let images = abc();
        for start in 0..images.len() {
            let mut session = ViewerSession::new();
            let source = images.get(start as i64).unwrap().source.clone();
            session.select(&images, &source).unwrap();

            session.next(&images);
            session.previous(&images);
            assert_eq!(session.current_index(), Some(start));

            session.previous(&images);
            session.next(&images);
            assert_eq!(session.current_index(), Some(start));
        }
    }

    #[test]
    fn test_navigation_while_closed_is_a_no_op() {
        let images = abc();
        let mut session = ViewerSession::new();

        assert_eq!(session.next(&images), None);
        assert_eq!(session.previous(&images), None);
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_resets_to_closed() {
        let images = abc();
        let mut session = ViewerSession::new();
        session.select(&images, &"a.jpg".into()).unwrap();

        session.close();
        assert!(!session.is_open());
        assert_eq!(session.current(&images), None);

        // A stray navigation event after close must not reopen anything
        assert_eq!(session.next(&images), None);
        assert!(!session.is_open());
    }

    #[test]
    fn test_index_and_identifier_agree_in_every_open_state() {
        let images = abc();
        let mut session = ViewerSession::new();
        session.select(&images, &"a.jpg".into()).unwrap();

        for _ in 0..7 {
            session.next(&images);
            let idx = session.current_index().unwrap();
            let entry = session.current(&images).unwrap();
            assert_eq!(images.index_of(&entry.source).unwrap(), idx);
        }
    }
}
