/// Lightbox viewer for one open viewing session
///
/// The modal captures the number of images when it is mounted and keeps
/// its own current index. It is created fresh for every open, so a reopen
/// always starts at the clicked image.
use iced::widget::{button, column, container, image, opaque, row, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};

use super::format::{display_date, position_label};
use super::gallery_item::placeholder;
use crate::state::data::ImageRecord;

/// Messages handled by the modal (buttons and keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    Close,
}

/// Events the modal reports to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked to dismiss the viewer
    Closed,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GalleryModal {
    initial_index: usize,
    current_index: usize,
    /// Number of images, fixed for the modal's lifetime
    len: usize,
}

impl GalleryModal {
    /// Mount a viewer over `len` images starting at `initial_index`.
    ///
    /// An empty gallery never offers a selection, so `len == 0` or an
    /// out-of-range start is a caller bug.
    pub fn new(len: usize, initial_index: usize) -> Self {
        debug_assert!(len > 0, "gallery modal mounted with no images");
        debug_assert!(
            initial_index < len,
            "initial index {initial_index} out of range for {len} images"
        );

        tracing::debug!(initial_index, len, "gallery modal mounted");
        Self {
            initial_index,
            current_index: initial_index,
            len,
        }
    }

    /// Position the modal was opened on
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of images the modal was mounted over
    pub fn image_count(&self) -> usize {
        self.len
    }

    /// Step back one image, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.len - 1) % self.len;
    }

    /// Step forward one image, wrapping from the last to the first
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len;
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Previous => {
                self.previous();
                tracing::debug!(index = self.current_index, "gallery modal previous");
                None
            }
            Message::Next => {
                self.next();
                tracing::debug!(index = self.current_index, "gallery modal next");
                None
            }
            Message::Close => Some(Event::Closed),
        }
    }

    /// Full-window overlay with the enlarged image, its caption and the
    /// navigation controls. `images` and `sources` are the grid's slices.
    pub fn view<'a>(
        &self,
        images: &'a [ImageRecord],
        sources: &'a [Option<image::Handle>],
    ) -> Element<'a, Message> {
        let record = &images[self.current_index];

        let picture: Element<'a, Message> = match &sources[self.current_index] {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => placeholder(&record.alt, Length::Fill),
        };

        let close_button = button(text("×").size(36).color(Color::WHITE))
            .on_press(Message::Close)
            .style(button::text);

        let previous_button = button(text("‹").size(56).color(Color::WHITE))
            .on_press(Message::Previous)
            .style(button::text);

        let next_button = button(text("›").size(56).color(Color::WHITE))
            .on_press(Message::Next)
            .style(button::text);

        let stage = row![previous_button, picture, next_button]
            .spacing(16)
            .align_y(Alignment::Center)
            .height(Length::Fill);

        let caption = column![
            text(&record.caption).size(20).color(Color::WHITE),
            text(display_date(record.date))
                .size(14)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7)),
            text(position_label(self.current_index, self.image_count()))
                .size(12)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.5)),
        ]
        .spacing(4);

        let content = column![
            row![Space::with_width(Length::Fill), close_button],
            stage,
            caption,
        ]
        .spacing(12)
        .padding(24)
        .max_width(1024)
        .height(Length::Fill);

        // The backdrop swallows clicks so the grid below stays inert
        opaque(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.8))),
                    ..container::Style::default()
                }),
        )
    }
}

impl Drop for GalleryModal {
    fn drop(&mut self) {
        tracing::debug!(index = self.current_index, "gallery modal unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_initial_index() {
        let modal = GalleryModal::new(4, 2);
        assert_eq!(modal.initial_index(), 2);
        assert_eq!(modal.current_index(), 2);
        assert_eq!(modal.image_count(), 4);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut modal = GalleryModal::new(4, 0);
        modal.previous();
        assert_eq!(modal.current_index(), 3);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut modal = GalleryModal::new(4, 3);
        modal.next();
        assert_eq!(modal.current_index(), 0);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut modal = GalleryModal::new(1, 0);
        modal.next();
        assert_eq!(modal.current_index(), 0);
        modal.previous();
        assert_eq!(modal.current_index(), 0);
    }

    #[test]
    fn test_close_reports_event_without_moving() {
        let mut modal = GalleryModal::new(3, 1);
        assert_eq!(modal.update(Message::Close), Some(Event::Closed));
        assert_eq!(modal.current_index(), 1);
    }

    #[test]
    fn test_navigation_reports_no_event() {
        let mut modal = GalleryModal::new(3, 1);
        assert_eq!(modal.update(Message::Next), None);
        assert_eq!(modal.update(Message::Previous), None);
        assert_eq!(modal.current_index(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no images")]
    fn test_mounting_empty_gallery_is_rejected() {
        let _ = GalleryModal::new(0, 0);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(
            len in 1usize..40,
            start in 0usize..40,
            steps in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut modal = GalleryModal::new(len, start % len);
            for forward in steps {
                if forward {
                    modal.next();
                } else {
                    modal.previous();
                }
                prop_assert!(modal.current_index() < len);
            }
        }

        #[test]
        fn next_then_previous_round_trips(len in 1usize..40, start in 0usize..40) {
            let start = start % len;

            let mut modal = GalleryModal::new(len, start);
            modal.next();
            modal.previous();
            prop_assert_eq!(modal.current_index(), start);

            modal.previous();
            modal.next();
            prop_assert_eq!(modal.current_index(), start);
        }

        #[test]
        fn full_cycle_returns_home(len in 1usize..40, start in 0usize..40) {
            let start = start % len;
            let mut modal = GalleryModal::new(len, start);
            for _ in 0..len {
                modal.next();
            }
            prop_assert_eq!(modal.current_index(), start);
        }
    }
}
