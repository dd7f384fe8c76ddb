/// View-layer helpers
///
/// This module builds the widget trees, including:
/// - The thumbnail grid (grid.rs)
/// - The lightbox overlay (lightbox.rs)
/// - The gesture-capture canvas layer (swipe.rs)

pub mod grid;
pub mod lightbox;
pub mod swipe;
