/// Image set registry
///
/// An ordered, immutable list of gallery images with wraparound index
/// arithmetic. "Next" from the last image lands on the first and vice
/// versa, so every integer index resolves to an entry as long as the
/// set is non-empty.

use crate::error::{GalleryError, Result};
use crate::state::data::{GalleryImage, ImageRef};

/// Ordered, immutable sequence of gallery images.
///
/// Constructed once from the manifest (or a folder scan) and never
/// mutated afterwards; navigation replaces the whole set instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSet {
    entries: Vec<GalleryImage>,
}

impl ImageSet {
    /// Build a registry from an ordered list of entries
    pub fn new(entries: Vec<GalleryImage>) -> Self {
        ImageSet { entries }
    }

    /// Number of images in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set has no images
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalize any integer index into `0..len`.
    ///
    /// Uses `((index % n) + n) % n` so negative indices wrap from the end.
    /// Fails only when the set is empty.
    pub fn normalize(&self, index: i64) -> Result<usize> {
        let n = self.entries.len() as i64;
        if n == 0 {
            return Err(GalleryError::OutOfRange);
        }
        Ok((((index % n) + n) % n) as usize)
    }

    /// Look up an entry by index, with wraparound.
    ///
    /// Any integer (including negatives) yields a defined result on a
    /// non-empty set; this is the contract next/previous rely on at the
    /// boundaries.
    pub fn get(&self, index: i64) -> Result<&GalleryImage> {
        let idx = self.normalize(index)?;
        Ok(&self.entries[idx])
    }

    /// First position of the image with the given source.
    ///
    /// Fails with `NotFound` when the reference is not a member; that
    /// indicates a wiring bug upstream, not a transient condition.
    pub fn index_of(&self, source: &ImageRef) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.source == source)
            .ok_or_else(|| GalleryError::NotFound(source.clone()))
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.entries.iter()
    }
}
