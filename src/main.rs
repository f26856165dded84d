use clap::Parser;
use iced::widget::{column, image, scrollable, stack, text};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use config::{Config, ThemeChoice};
use state::manifest::GalleryManifest;
use ui::gallery_grid::{self, GalleryGrid, Layout};
use ui::gallery_item::TileSize;

/// Photo gallery for the SUPAP community site
#[derive(Parser, Debug)]
#[command(name = "supap-gallery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gallery manifest (JSON) to show instead of the bundled one
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output for this crate
    #[arg(short, long)]
    verbose: bool,
}

/// Main application state
struct Gallery {
    config: Config,
    /// Section copy and image list currently shown
    manifest: GalleryManifest,
    grid: GalleryGrid,
    /// Message shown under the grid when something went wrong
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Input for the gallery grid and its viewer
    Gallery(gallery_grid::Message),
    /// Background manifest load finished
    ManifestLoaded(Result<LoadedGallery, Arc<error::Error>>),
}

/// A manifest read from disk with its image files already checked
#[derive(Debug, Clone)]
struct LoadedGallery {
    manifest: GalleryManifest,
    sources: Vec<Option<image::Handle>>,
}

impl Gallery {
    /// Create the application with the bundled manifest, and start loading
    /// the configured one in the background if there is one
    fn new(config: Config, manifest: GalleryManifest) -> (Self, Task<Message>) {
        let sources = gallery_grid::resolve_sources(&manifest.images, manifest.base_dir());
        let grid = build_grid(&manifest, sources, &config);
        tracing::info!(images = grid.len(), "gallery ready");

        let task = match config.manifest.clone() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading gallery manifest");
                Task::perform(load_gallery(path), Message::ManifestLoaded)
            }
            None => Task::none(),
        };

        (
            Gallery {
                config,
                manifest,
                grid,
                status: None,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.grid.update(message);
            }
            Message::ManifestLoaded(Ok(LoadedGallery { manifest, sources })) => {
                if let Some(index) = self.grid.viewed_index() {
                    tracing::debug!(index, "replacing gallery while the viewer is open");
                }
                // A new image list means a new grid; any open viewer goes with the old one
                self.grid = build_grid(&manifest, sources, &self.config);
                self.manifest = manifest;
                self.status = None;
            }
            Message::ManifestLoaded(Err(err)) => {
                tracing::warn!(%err, "keeping bundled gallery");
                self.status = Some(format!("No se pudo cargar la galería: {err}"));
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let heading = column![
            text(&self.manifest.badge).size(14),
            text(&self.manifest.title).size(40),
            text(&self.manifest.description).size(16),
        ]
        .spacing(12)
        .max_width(760)
        .align_x(Alignment::Center);

        let mut page = column![heading, self.grid.view().map(Message::Gallery)]
            .spacing(48)
            .padding(40)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            page = page.push(text(status).size(14));
        }

        page = page.push(text(&self.manifest.footer).size(12));

        let page = scrollable(page).width(Length::Fill).height(Length::Fill);

        match self.grid.modal_overlay() {
            Some(overlay) => stack![page, overlay.map(Message::Gallery)].into(),
            None => page.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.grid.subscription().map(Message::Gallery)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn build_grid(
    manifest: &GalleryManifest,
    sources: Vec<Option<image::Handle>>,
    config: &Config,
) -> GalleryGrid {
    let layout = Layout {
        tile: TileSize {
            width: config.thumbnail_width,
            height: config.thumbnail_height,
        },
        spacing: config.spacing,
    };

    GalleryGrid::with_sources(manifest.images.clone(), sources, layout)
}

/// Read the manifest and check its image files off the UI thread
async fn load_gallery(path: PathBuf) -> Result<LoadedGallery, Arc<error::Error>> {
    let manifest = GalleryManifest::load(path).await.map_err(Arc::new)?;

    tokio::task::spawn_blocking(move || {
        let sources = gallery_grid::resolve_sources(&manifest.images, manifest.base_dir());
        LoadedGallery { manifest, sources }
    })
    .await
    .map_err(|err| Arc::new(error::Error::from(err)))
}

/// Logs go to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("supap_gallery=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("supap_gallery=info,warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(config::default_path);
    let mut config = config::load_or_default(config_path.as_deref());
    if let Some(manifest) = cli.manifest {
        config.manifest = Some(manifest);
    }

    // The bundled manifest is checked by the test suite; failing here means a broken build
    let manifest = match GalleryManifest::embedded() {
        Ok(manifest) => manifest,
        Err(err) => {
            tracing::error!(%err, "bundled gallery manifest is invalid");
            std::process::exit(1);
        }
    };

    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("SUPAP · Galería", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config, manifest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> Gallery {
        let manifest = GalleryManifest::embedded().unwrap();
        Gallery::new(Config::default(), manifest).0
    }

    #[test]
    fn test_starts_with_bundled_gallery() {
        let app = app();
        assert_eq!(app.grid.len(), app.manifest.images.len());
        assert!(!app.grid.is_modal_open());
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_gallery_messages_reach_the_grid() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemPressed(1)));
        assert_eq!(app.grid.selected_index(), Some(1));

        let _ = app.update(Message::Gallery(gallery_grid::Message::Modal(
            ui::gallery_modal::Message::Close,
        )));
        assert!(!app.grid.is_modal_open());
    }

    #[test]
    fn test_loaded_manifest_replaces_grid() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemPressed(0)));

        let replacement = GalleryManifest::from_json(
            r#"{"title": "Otra", "images": [
                {"id": 9, "src": "", "alt": "x", "caption": "X", "date": "2025-01-05"}
            ]}"#,
            None,
        )
        .unwrap();
        let sources = gallery_grid::resolve_sources(&replacement.images, None);
        let loaded = LoadedGallery {
            manifest: replacement,
            sources,
        };
        let _ = app.update(Message::ManifestLoaded(Ok(loaded)));

        assert_eq!(app.manifest.title, "Otra");
        assert_eq!(app.grid.len(), 1);
        assert!(!app.grid.is_modal_open());
    }

    #[tokio::test]
    async fn test_background_load_checks_image_files() {
        let dir = tempfile::tempdir().unwrap();
        let real = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/gallery/momento-2.png");
        std::fs::copy(&real, dir.path().join("real.png")).unwrap();
        std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();

        let path = dir.path().join("gallery.json");
        std::fs::write(
            &path,
            r#"{"title": "Prueba", "images": [
                {"id": 1, "src": "real.png", "alt": "a", "caption": "A", "date": "2025-01-05"},
                {"id": 2, "src": "broken.png", "alt": "b", "caption": "B", "date": "2025-01-06"}
            ]}"#,
        )
        .unwrap();

        let loaded = load_gallery(path).await.unwrap();
        let resolved: Vec<bool> = loaded.sources.iter().map(Option::is_some).collect();
        assert_eq!(resolved, vec![true, false]);
        assert_eq!(loaded.manifest.title, "Prueba");
    }

    #[test]
    fn test_failed_load_keeps_gallery_and_reports() {
        let mut app = app();
        let before = app.grid.len();
        let err = Arc::new(error::Error::DuplicateImageId(4));
        let _ = app.update(Message::ManifestLoaded(Err(err)));

        assert_eq!(app.grid.len(), before);
        assert!(app.status.as_deref().unwrap_or_default().contains("duplicate image id 4"));
    }
}
