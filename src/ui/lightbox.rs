/// Lightbox overlay
///
/// Full-size viewer stacked above the grid: dark backdrop (click to
/// close), the current image or a loading placeholder, prev/next/close
/// buttons, a slideshow toggle, caption line, and pagination dots.

use iced::widget::{
    button, canvas, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::state::data::GalleryImage;
use crate::state::gesture::SwipeThresholds;
use crate::ui::swipe::SwipeArea;
use crate::Message;

/// Build the overlay layer for the currently open image
pub fn overlay(
    entry: &GalleryImage,
    index: usize,
    total: usize,
    loaded: bool,
    slideshow: bool,
    thresholds: SwipeThresholds,
) -> Element<'static, Message> {
    // The image itself, or a placeholder until its bytes settle.
    // A failed load still settles and renders whatever the image
    // widget shows for an unreadable file; navigation is never blocked.
    let media: Element<'static, Message> = if loaded {
        image(image::Handle::from_path(entry.source.as_path()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        container(text("Loading…").size(18))
            .center(Length::Fill)
            .into()
    };

    // Gesture layer sits over the image but under the buttons
    let stage = stack![
        media,
        canvas(SwipeArea::new(thresholds))
            .width(Length::Fill)
            .height(Length::Fill),
    ];

    let slideshow_label = if slideshow { "⏸" } else { "▶" };
    let top_bar = row![
        button(text(slideshow_label)).on_press(Message::ToggleSlideshow),
        horizontal_space(),
        text(format!("{} / {}", index + 1, total)).size(14),
        horizontal_space(),
        button(text("✕")).on_press(Message::CloseViewer),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    let nav = row![
        button(text("←")).on_press(Message::Previous),
        stage,
        button(text("→")).on_press(Message::Next),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    let card = column![top_bar, nav, caption_line(entry), dots(index, total)]
        .spacing(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center);

    opaque(
        mouse_area(
            container(opaque(card))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(48)
                .style(backdrop),
        )
        .on_press(Message::CloseViewer),
    )
}

/// Caption text: explicit caption when present, filename otherwise,
/// with the capture date appended when known
fn caption_line(entry: &GalleryImage) -> Element<'static, Message> {
    let mut line = entry.caption.clone().unwrap_or_else(|| {
        entry
            .source
            .as_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    if let Some(date) = entry.captured_on {
        line = format!("{line} · {}", date.format("%-d %b %Y"));
    }

    text(line).size(14).into()
}

/// Pagination dots, one per image, the current one highlighted
fn dots(index: usize, total: usize) -> Element<'static, Message> {
    let dots = (0..total).map(|i| -> Element<'static, Message> {
        let color = if i == index {
            Color::WHITE
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.4)
        };
        text("●")
            .size(9)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
            .into()
    });

    iced::widget::Row::with_children(dots)
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}

/// Near-black translucent backdrop behind the card
fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.92,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
