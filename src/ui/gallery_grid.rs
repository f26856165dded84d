/// Thumbnail grid and owner of the gallery selection
///
/// The selection is a single `Option<GalleryModal>`: the modal exists
/// exactly when an image is selected, so two viewers can never be open.
use iced::widget::{container, image, text};
use iced::{Element, Length, Pixels, Subscription};
use iced_aw::Wrap;
use std::path::Path;

use super::gallery_item::{self, TileSize};
use super::gallery_modal::{self, GalleryModal};
use super::keyboard;
use crate::state::data::ImageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Thumbnail at this position was clicked
    ItemPressed(usize),
    ItemEntered(usize),
    ItemExited(usize),
    /// Input for the mounted modal (buttons or keyboard)
    Modal(gallery_modal::Message),
}

/// Grid layout settings, taken from the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub tile: TileSize,
    pub spacing: f32,
}

pub struct GalleryGrid {
    images: Vec<ImageRecord>,
    /// Image handle per record, None where a placeholder is shown
    sources: Vec<Option<image::Handle>>,
    selection: Option<GalleryModal>,
    hovered: Option<usize>,
    layout: Layout,
}

impl GalleryGrid {
    /// Build a grid over `images` in the given order.
    /// Relative sources resolve against `base_dir`.
    #[cfg(test)]
    pub fn new(images: Vec<ImageRecord>, base_dir: Option<&Path>, layout: Layout) -> Self {
        let sources = resolve_sources(&images, base_dir);
        Self::with_sources(images, sources, layout)
    }

    /// Build a grid from sources already checked by [`resolve_sources`]
    pub fn with_sources(
        images: Vec<ImageRecord>,
        sources: Vec<Option<image::Handle>>,
        layout: Layout,
    ) -> Self {
        debug_assert_eq!(images.len(), sources.len(), "one source per image");

        Self {
            images,
            sources,
            selection: None,
            hovered: None,
            layout,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Position of the thumbnail the viewer was opened from, if it is open
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.as_ref().map(GalleryModal::initial_index)
    }

    /// Position the open viewer is currently showing
    pub fn viewed_index(&self) -> Option<usize> {
        self.selection.as_ref().map(GalleryModal::current_index)
    }

    #[cfg(test)]
    pub fn modal(&self) -> Option<&GalleryModal> {
        self.selection.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.selection.is_some()
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ItemPressed(index) => self.select(index),
            Message::ItemEntered(index) => self.hovered = Some(index),
            Message::ItemExited(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
            }
            Message::Modal(message) => {
                // Key events can still be queued after the modal closed
                let Some(modal) = self.selection.as_mut() else {
                    tracing::trace!(?message, "no modal mounted, dropping input");
                    return;
                };

                if let Some(gallery_modal::Event::Closed) = modal.update(message) {
                    self.selection = None;
                }
            }
        }
    }

    fn select(&mut self, index: usize) {
        if self.selection.is_some() {
            return;
        }

        if index >= self.images.len() {
            tracing::warn!(index, len = self.images.len(), "ignoring selection out of range");
            return;
        }

        tracing::debug!(index, id = self.images[index].id, "gallery item selected");
        self.selection = Some(GalleryModal::new(self.images.len(), index));
    }

    /// The thumbnails, in record order
    pub fn view(&self) -> Element<'_, Message> {
        if self.is_empty() {
            return container(text("Todavía no hay imágenes en la galería.").size(16))
                .center_x(Length::Fill)
                .into();
        }

        let tiles: Vec<Element<'_, Message>> = self
            .images
            .iter()
            .zip(&self.sources)
            .enumerate()
            .map(|(index, (record, source))| {
                gallery_item::view(
                    record,
                    source.as_ref(),
                    self.layout.tile,
                    self.hovered == Some(index),
                )
                .map(move |message| route(index, message))
            })
            .collect();

        container(
            Wrap::with_elements(tiles)
                .spacing(Pixels(self.layout.spacing))
                .line_spacing(Pixels(self.layout.spacing)),
        )
        .center_x(Length::Fill)
        .into()
    }

    /// The viewer overlay while an image is selected.
    /// The caller stacks it over the whole page.
    pub fn modal_overlay(&self) -> Option<Element<'_, Message>> {
        let modal = self.selection.as_ref()?;
        Some(modal.view(&self.images, &self.sources).map(Message::Modal))
    }

    /// Keyboard listener, live only while the viewer is open
    pub fn subscription(&self) -> Subscription<Message> {
        if self.selection.is_some() {
            keyboard::listener().map(Message::Modal)
        } else {
            Subscription::none()
        }
    }
}

/// Attach a tile's position to its message
fn route(index: usize, message: gallery_item::Message) -> Message {
    match message {
        gallery_item::Message::Pressed => Message::ItemPressed(index),
        gallery_item::Message::Entered => Message::ItemEntered(index),
        gallery_item::Message::Exited => Message::ItemExited(index),
    }
}

/// Check every record's image once and build a handle for the readable ones.
/// Missing files and files that are not a known image format get None,
/// so they render as a placeholder instead of an empty tile.
/// Blocking: reads each file's header.
pub fn resolve_sources(
    images: &[ImageRecord],
    base_dir: Option<&Path>,
) -> Vec<Option<image::Handle>> {
    images
        .iter()
        .map(|record| {
            let path = record.resolved_src(base_dir)?;

            let readable = ::image::ImageReader::open(&path)
                .and_then(|reader| reader.with_guessed_format())
                .map_err(|err| err.to_string())
                .and_then(|reader| reader.into_dimensions().map_err(|err| err.to_string()));

            match readable {
                Ok(_) => Some(image::Handle::from_path(path)),
                Err(err) => {
                    tracing::warn!(
                        id = record.id,
                        path = %path.display(),
                        %err,
                        "unreadable image, showing placeholder"
                    );
                    None
                }
            }
        })
        .collect()
}
