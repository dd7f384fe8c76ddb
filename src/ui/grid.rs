/// Thumbnail grid for the gallery page
///
/// A wrapping grid of clickable tiles. Tiles whose thumbnail has not
/// been generated yet show a placeholder; clicking any tile opens the
/// lightbox on that image.

use iced::widget::{button, container, image, text};
use iced::{Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::state::data::ImageRef;
use crate::state::registry::ImageSet;
use crate::Message;

/// Edge length of a grid tile, in logical pixels
const TILE_SIZE: f32 = 160.0;

/// Build the thumbnail grid
pub fn view<'a>(
    images: &'a ImageSet,
    thumbnails: &'a HashMap<ImageRef, PathBuf>,
) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = images
        .iter()
        .map(|entry| {
            let content: Element<'a, Message> = match thumbnails.get(&entry.source) {
                Some(path) => container(
                    image(image::Handle::from_path(path))
                        .width(Length::Fixed(TILE_SIZE))
                        .height(Length::Fixed(TILE_SIZE)),
                )
                .center(TILE_SIZE)
                .into(),
                // Placeholder until the thumbnail message lands
                None => container(text("…").size(24)).center(TILE_SIZE).into(),
            };

            button(content)
                .padding(2)
                .on_press(Message::Open(entry.source.clone()))
                .into()
        })
        .collect();

    Wrap::with_elements(tiles)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}
