use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::data::ImageRecord;
use crate::error::{Error, Result};

/// Gallery shipped with the binary
const EMBEDDED_MANIFEST: &str = include_str!("../../assets/gallery.json");

/// The fixed list of images shown by the gallery, plus the section copy
/// around it. Display order is the order of `images` in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub badge: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
    /// Directory relative image paths resolve against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl GalleryManifest {
    /// The manifest bundled at build time.
    /// Its images live in the crate's `assets/` directory.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_MANIFEST, Some(Path::new(env!("CARGO_MANIFEST_DIR"))))
    }

    /// Parse a manifest from JSON text
    pub fn from_json(text: &str, base_dir: Option<&Path>) -> Result<Self> {
        let mut manifest: GalleryManifest = serde_json::from_str(text)?;
        manifest.base_dir = base_dir.map(Path::to_path_buf);
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest file from disk.
    /// Relative image paths resolve against the file's directory.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;

        let manifest = Self::from_json(&text, path.parent())?;
        tracing::info!(
            path = %path.display(),
            images = manifest.images.len(),
            "loaded gallery manifest"
        );
        Ok(manifest)
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Reject manifests whose ids would collide when used as keys
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.images.len());
        for image in &self.images {
            if !seen.insert(image.id) {
                return Err(Error::DuplicateImageId(image.id));
            }
        }
        Ok(())
    }
}
