/// A single thumbnail tile in the gallery grid
use iced::widget::{column, container, image, mouse_area, stack, text};
use iced::{alignment, mouse, Background, Color, ContentFit, Element, Length};

use super::format::display_date;
use crate::state::data::ImageRecord;

/// Fixed tile dimensions shared by every thumbnail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The tile was clicked
    Pressed,
    /// Pointer entered the tile
    Entered,
    /// Pointer left the tile
    Exited,
}

/// Render one thumbnail. The caption overlay only shows while `hovered`.
/// Stateless: the same inputs always produce the same tile.
pub fn view<'a>(
    record: &'a ImageRecord,
    source: Option<&'a image::Handle>,
    size: TileSize,
    hovered: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match source {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => placeholder(&record.alt, Length::Fill),
    };

    let tile: Element<'a, Message> = if hovered {
        stack![picture, caption_overlay(record)].into()
    } else {
        picture
    };

    mouse_area(
        container(tile)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .clip(true),
    )
    .on_press(Message::Pressed)
    .on_enter(Message::Entered)
    .on_exit(Message::Exited)
    .interaction(mouse::Interaction::Pointer)
    .into()
}

/// Caption and date, anchored to the bottom of the tile
fn caption_overlay<'a>(record: &'a ImageRecord) -> Element<'a, Message> {
    let caption = column![
        text(&record.caption).size(15).color(Color::WHITE),
        text(display_date(record.date))
            .size(12)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.8)),
    ]
    .spacing(2);

    container(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_y(alignment::Vertical::Bottom)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
            ..container::Style::default()
        })
        .into()
}

/// Stand-in for an image with no usable source: a muted box with the alt text
pub fn placeholder<'a, M: 'a>(alt: &'a str, height: Length) -> Element<'a, M> {
    container(text(alt).size(14))
        .padding(12)
        .center_x(Length::Fill)
        .center_y(height)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(src: &str) -> ImageRecord {
        ImageRecord {
            id: 3,
            src: src.to_string(),
            alt: "Encuentro comunitario".to_string(),
            caption: "Encuentro".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        }
    }

    const SIZE: TileSize = TileSize {
        width: 320.0,
        height: 256.0,
    };

    // Building the tree exercises both branches without a renderer
    #[test]
    fn test_builds_with_and_without_source() {
        let with_source = record("a.png");
        let handle = image::Handle::from_path("a.png");
        let _ = view(&with_source, Some(&handle), SIZE, false);
        let _ = view(&with_source, Some(&handle), SIZE, true);

        let without_source = record("");
        let _ = view(&without_source, None, SIZE, true);
    }
}
