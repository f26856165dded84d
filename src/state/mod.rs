/// State management module
///
/// This module holds the data that flows into the gallery:
/// - Image records (data.rs)
/// - The gallery manifest that supplies them (manifest.rs)

pub mod data;
pub mod manifest;
