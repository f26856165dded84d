/// Shared data structures for the gallery
///
/// These structs represent the data model that flows from the
/// manifest into the UI layer. Nothing in the UI mutates them.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Represents a single photograph in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Stable identifier, unique within a manifest
    pub id: u32,
    /// Path to the image file (relative paths resolve against the manifest directory)
    #[serde(default)]
    pub src: String,
    /// Accessibility text, also shown when the image has no source
    pub alt: String,
    /// Short description shown as an overlay
    pub caption: String,
    /// Event date, display only (ISO `YYYY-MM-DD` in the manifest)
    pub date: NaiveDate,
}

impl ImageRecord {
    /// Whether the record points at an image at all
    pub fn has_source(&self) -> bool {
        !self.src.trim().is_empty()
    }

    /// Resolve `src` against the manifest directory.
    /// Returns None when the record has no source.
    pub fn resolved_src(&self, base: Option<&Path>) -> Option<PathBuf> {
        if !self.has_source() {
            return None;
        }

        let path = Path::new(self.src.trim());
        match base {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.to_path_buf()),
        }
    }
}
