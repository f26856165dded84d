/// User interface module
///
/// This module contains the gallery widgets:
/// - One thumbnail tile (gallery_item.rs)
/// - The thumbnail grid that owns the selection (gallery_grid.rs)
/// - The lightbox viewer (gallery_modal.rs)
/// - Keyboard routing for the viewer (keyboard.rs)
/// - Display formatting helpers (format.rs)

pub mod format;
pub mod gallery_grid;
pub mod gallery_item;
pub mod gallery_modal;
pub mod keyboard;
