use iced::widget::{button, column, horizontal_space, row, scrollable, stack, text};
use iced::{keyboard, time, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;

// Declare the application modules
mod error;
mod loader;
mod state;
mod ui;

use error::GalleryError;
use loader::{manifest, preload, thumbnail};
use state::config::ViewerConfig;
use state::data::{GalleryImage, ImageRef};
use state::gesture::SwipeDirection;
use state::registry::ImageSet;
use state::session::ViewerSession;

/// Main application state
struct GalleryApp {
    /// Ordered, immutable image registry
    images: ImageSet,
    /// Generated thumbnail paths, keyed by source
    thumbnails: HashMap<ImageRef, PathBuf>,
    /// Per-image load-state tracker
    preloader: preload::Preloader,
    /// Lightbox open/closed state machine
    session: ViewerSession,
    /// Swipe thresholds and slideshow interval
    config: ViewerConfig,
    /// Whether the slideshow auto-advances while the lightbox is open
    slideshow: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background folder scan completed
    FolderScanned(Vec<GalleryImage>),
    /// The gallery manifest finished loading at startup
    ManifestLoaded(Result<Vec<GalleryImage>, GalleryError>),
    /// The gallery manifest finished saving after an import
    ManifestSaved(Result<(), GalleryError>),
    /// A thumbnail finished generating (None if generation failed)
    ThumbnailReady(ImageRef, Option<PathBuf>),
    /// A preload fetch settled, successfully or not
    ImageSettled(ImageRef),
    /// User clicked a thumbnail
    Open(ImageRef),
    /// Advance to the next image
    Next,
    /// Go back to the previous image
    Previous,
    /// A horizontal swipe was recognized in the lightbox
    Swiped(SwipeDirection),
    /// Close the lightbox
    CloseViewer,
    /// Start or stop the slideshow
    ToggleSlideshow,
    /// Slideshow interval elapsed
    SlideshowTick,
}

impl GalleryApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = ViewerConfig::load_or_default(&manifest::default_config_path());

        println!("🖼️  Gallery initialized, manifest at {}", manifest::default_manifest_path().display());

        let app = GalleryApp {
            images: ImageSet::default(),
            thumbnails: HashMap::new(),
            preloader: preload::Preloader::new(),
            session: ViewerSession::new(),
            config,
            slideshow: false,
            status: "Loading gallery…".to_string(),
        };

        (
            app,
            Task::perform(
                manifest::load(manifest::default_manifest_path()),
                Message::ManifestLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Photos")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Importing from {}…", folder_path.display());
                    return Task::perform(
                        manifest::scan_folder(folder_path),
                        Message::FolderScanned,
                    );
                }

                Task::none()
            }
            Message::FolderScanned(entries) => {
                self.status = format!("Imported {} images.", entries.len());
                self.replace_gallery(entries.clone());

                // Persist the new registry as the manifest
                let save = Task::perform(
                    manifest::save(manifest::default_manifest_path(), entries),
                    Message::ManifestSaved,
                );
                Task::batch([save, self.thumbnail_tasks()])
            }
            Message::ManifestLoaded(Ok(entries)) => {
                if entries.is_empty() {
                    self.status = "No gallery yet. Use \"Open Folder…\" to import photos.".to_string();
                    return Task::none();
                }

                self.status = format!("Ready. {} images in gallery.", entries.len());
                self.replace_gallery(entries);
                self.thumbnail_tasks()
            }
            Message::ManifestLoaded(Err(e)) => {
                eprintln!("⚠️  Failed to load manifest: {e}");
                self.status = format!("⚠️  Could not load gallery: {e}");
                Task::none()
            }
            Message::ManifestSaved(Ok(())) => {
                println!("✅ Manifest saved");
                Task::none()
            }
            Message::ManifestSaved(Err(e)) => {
                eprintln!("⚠️  Failed to save manifest: {e}");
                self.status = format!("⚠️  Could not save gallery: {e}");
                Task::none()
            }
            Message::ThumbnailReady(source, path) => {
                if let Some(path) = path {
                    self.thumbnails.insert(source, path);
                }
                Task::none()
            }
            Message::ImageSettled(source) => {
                self.preloader.settle(source);
                Task::none()
            }
            Message::Open(source) => match self.session.select(&self.images, &source) {
                Ok(index) => self.preload_around(index),
                Err(e) => {
                    // A grid/registry wiring bug; report it, stay put
                    eprintln!("⚠️  {e}");
                    self.status = format!("⚠️  {e}");
                    Task::none()
                }
            },
            Message::Next | Message::SlideshowTick => {
                match self.session.next(&self.images) {
                    Some(index) => self.preload_around(index),
                    None => Task::none(),
                }
            }
            Message::Previous => match self.session.previous(&self.images) {
                Some(index) => self.preload_around(index),
                None => Task::none(),
            },
            Message::Swiped(SwipeDirection::Left) => self.update(Message::Next),
            Message::Swiped(SwipeDirection::Right) => self.update(Message::Previous),
            Message::CloseViewer => {
                self.session.close();
                self.slideshow = false;
                Task::none()
            }
            Message::ToggleSlideshow => {
                self.slideshow = !self.slideshow;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Gallery").size(28),
            horizontal_space(),
            button("Open Folder…").on_press(Message::OpenFolder).padding(8),
        ]
        .align_y(Alignment::Center)
        .spacing(12);

        let base: Element<Message> = column![
            header,
            text(&self.status).size(14),
            scrollable(ui::grid::view(&self.images, &self.thumbnails))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(16)
        .padding(20)
        .into();

        // The lightbox overlays the grid while a session is open
        match self.session.current(&self.images) {
            Some(entry) => {
                let index = self
                    .session
                    .current_index()
                    .unwrap_or_default();
                let overlay = ui::lightbox::overlay(
                    entry,
                    index,
                    self.images.len(),
                    self.preloader.is_loaded(&entry.source),
                    self.slideshow,
                    self.config.swipe_thresholds(),
                );
                stack![base, overlay].into()
            }
            None => base,
        }
    }

    /// Keyboard and slideshow subscriptions.
    ///
    /// Both exist only while the lightbox is open: dropping the
    /// subscription on close is what releases the global key listener.
    fn subscription(&self) -> Subscription<Message> {
        if !self.session.is_open() {
            return Subscription::none();
        }

        let keys = keyboard::on_key_press(handle_key);

        if self.slideshow {
            let ticks = time::every(self.config.slideshow_interval())
                .map(|_| Message::SlideshowTick);
            Subscription::batch([keys, ticks])
        } else {
            keys
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Swap in a freshly loaded or imported image list
    fn replace_gallery(&mut self, entries: Vec<GalleryImage>) {
        self.images = ImageSet::new(entries);
        self.session.close();
        self.slideshow = false;
        self.preloader = preload::Preloader::new();
    }

    /// Begin preloading the current image and its two wraparound
    /// neighbors, skipping anything already settled or in flight
    fn preload_around(&mut self, index: usize) -> Task<Message> {
        let mut fetches = Vec::new();

        for delta in [0i64, 1, -1] {
            if let Ok(entry) = self.images.get(index as i64 + delta) {
                let source = entry.source.clone();
                if self.preloader.begin(&source) {
                    fetches.push(Task::perform(preload::fetch(source), Message::ImageSettled));
                }
            }
        }

        Task::batch(fetches)
    }

    /// Spawn thumbnail generation for every image without one yet
    fn thumbnail_tasks(&self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .images
            .iter()
            .filter(|entry| !self.thumbnails.contains_key(&entry.source))
            .map(|entry| {
                Task::perform(thumbnail::generate(entry.source.clone()), |(source, path)| {
                    Message::ThumbnailReady(source, path)
                })
            })
            .collect();

        Task::batch(tasks)
    }
}

/// Map key presses to lightbox navigation.
/// Only subscribed while the lightbox is open.
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseViewer),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(
        "Gallery",
        GalleryApp::update,
        GalleryApp::view,
    )
    .subscription(GalleryApp::subscription)
    .theme(GalleryApp::theme)
    .centered()
    .run_with(GalleryApp::new)
}
