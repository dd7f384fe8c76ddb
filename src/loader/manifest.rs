/// Gallery manifest persistence and folder import
///
/// The ordered image list lives in a JSON manifest in the user's data
/// directory. Importing a folder walks it recursively, keeps supported
/// image files in sorted order, and becomes the new manifest.

use crate::error::Result;
use crate::state::data::GalleryImage;
use std::path::PathBuf;
use tokio::task;
use walkdir::WalkDir;

/// Supported image file extensions (lowercased)
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Application data directory
/// Returns ~/.local/share/gallery-lightbox on Linux
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .expect("Could not determine user data directory");

    path.push("gallery-lightbox");
    path
}

/// Where the gallery manifest is stored
pub fn default_manifest_path() -> PathBuf {
    data_dir().join("gallery.json")
}

/// Where the viewer configuration is stored
pub fn default_config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Load the manifest from disk.
///
/// A manifest that does not exist yet is an empty gallery, not an
/// error; a manifest that exists but cannot be parsed is reported.
pub async fn load(path: PathBuf) -> Result<Vec<GalleryImage>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = tokio::fs::read_to_string(&path).await?;
    let entries: Vec<GalleryImage> = serde_json::from_str(&contents)?;
    Ok(entries)
}

/// Write the manifest to disk, creating the data directory if needed
pub async fn save(path: PathBuf, entries: Vec<GalleryImage>) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(&entries)?;
    tokio::fs::write(&path, json).await?;
    Ok(())
}

/// Recursively collect supported images under a folder.
///
/// Entries are sorted by path so the registry order is stable across
/// runs. Unreadable directory entries are skipped, not fatal.
pub async fn scan_folder(folder: PathBuf) -> Vec<GalleryImage> {
    task::spawn_blocking(move || scan_folder_blocking(&folder))
        .await
        .unwrap_or_default()
}

/// Blocking implementation of the folder scan
fn scan_folder_blocking(folder: &PathBuf) -> Vec<GalleryImage> {
    println!("🔍 Scanning folder: {}", folder.display());

    let mut sources: Vec<PathBuf> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    IMAGE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    sources.sort();

    println!("✅ Found {} images", sources.len());

    sources.into_iter().map(GalleryImage::from_source).collect()
}
