//! The image viewer component.
//!
//! [`ImageViewer`] wires the [`ZoomController`] and the
//! [`RotationCompositor`] together and owns the export side effects. The
//! page supplies two handlers at construction:
//!
//! - a [`SaveHandler`] that receives the exported data URI
//! - a [`DownloadHandler`] that triggers the file download
//!
//! Closures implement both traits, so tests and native callers can pass
//! `|data: &str| ...` directly.

use serde::Serialize;

use crate::compositor::RotationCompositor;
use crate::config::{ConfigError, ViewerConfig};
use crate::decode::{DecodeError, SourceImage};
use crate::export::{export_surface, ExportArtifact, ExportError};
use crate::zoom::{BackgroundSize, FocalPosition, FrameRect, PointerPosition, ZoomController};

/// Receives the data URI of every successful save.
pub trait SaveHandler {
    fn on_save(&mut self, data: &str);
}

impl<F: FnMut(&str)> SaveHandler for F {
    fn on_save(&mut self, data: &str) {
        self(data)
    }
}

/// Performs the client-local download of an export.
pub trait DownloadHandler {
    fn download(&mut self, artifact: &ExportArtifact);
}

impl<F: FnMut(&ExportArtifact)> DownloadHandler for F {
    fn download(&mut self, artifact: &ExportArtifact) {
        self(artifact)
    }
}

/// Download handler for hosts without a download mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDownload;

impl DownloadHandler for NoDownload {
    fn download(&mut self, artifact: &ExportArtifact) {
        tracing::debug!(filename = artifact.filename(), "No download handler, skipping");
    }
}

/// Snapshot of the user-visible view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub position: FocalPosition,
    pub zoom_factor: u32,
    pub rotation_degrees: i64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position: FocalPosition::CENTER,
            zoom_factor: 1,
            rotation_degrees: 0,
        }
    }
}

/// CSS properties for the zoomable, rotated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewStyle {
    pub background_image: String,
    pub background_position: String,
    pub background_size: String,
    pub transform: String,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The surface was exported and both handlers ran.
    Saved(ExportArtifact),
    /// Saving is not available yet (no rotation, or nothing loaded).
    Unavailable,
}

/// Interactive zoom/rotate/export viewer for a single image.
pub struct ImageViewer<S: SaveHandler, D: DownloadHandler = NoDownload> {
    source_url: String,
    config: ViewerConfig,
    zoom: ZoomController,
    compositor: RotationCompositor,
    save_handler: S,
    download_handler: D,
}

impl<S: SaveHandler> ImageViewer<S, NoDownload> {
    /// Create a viewer with default config and no download side effect.
    pub fn with_save_handler(source_url: impl Into<String>, save_handler: S) -> Self {
        Self::with_default_config(source_url, save_handler, NoDownload)
    }
}

impl<S: SaveHandler, D: DownloadHandler> ImageViewer<S, D> {
    /// Create a viewer in its initial state: centered, unzoomed, unrotated.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails [`ViewerConfig::validate`].
    pub fn new(
        source_url: impl Into<String>,
        config: ViewerConfig,
        save_handler: S,
        download_handler: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            source_url.into(),
            config,
            save_handler,
            download_handler,
        ))
    }

    /// Create a viewer with the stock configuration.
    pub fn with_default_config(
        source_url: impl Into<String>,
        save_handler: S,
        download_handler: D,
    ) -> Self {
        Self::from_parts(
            source_url.into(),
            ViewerConfig::default(),
            save_handler,
            download_handler,
        )
    }

    fn from_parts(
        source_url: String,
        config: ViewerConfig,
        save_handler: S,
        download_handler: D,
    ) -> Self {
        Self {
            source_url,
            zoom: ZoomController::new(config.zoom_step),
            compositor: RotationCompositor::new(&config),
            config,
            save_handler,
            download_handler,
        }
    }

    /// URL of the displayed image.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn compositor(&self) -> &RotationCompositor {
        &self.compositor
    }

    /// Current view state.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            position: self.zoom.position(),
            zoom_factor: self.zoom.zoom_factor(),
            rotation_degrees: self.compositor.rotation_degrees(),
        }
    }

    /// CSS for the view. Zoom is purely presentational, no raster work.
    pub fn style(&self) -> ViewStyle {
        let background_size: BackgroundSize = self.zoom.background_size();
        ViewStyle {
            background_image: format!("url({})", self.source_url),
            background_position: self.zoom.position().to_string(),
            background_size: background_size.to_string(),
            transform: format!("rotate({}deg)", self.compositor.rotation_degrees()),
        }
    }

    /// The image finished loading.
    pub fn on_load(&mut self, source: SourceImage) {
        if source.url() != self.source_url {
            tracing::warn!(
                expected = %self.source_url,
                actual = source.url(),
                "Loaded source URL differs from viewer URL"
            );
        }
        self.compositor.load(source);
    }

    /// The image failed to load. The surface stays unpopulated.
    pub fn on_load_error(&mut self, error: &DecodeError) {
        tracing::warn!(url = %self.source_url, %error, "Source failed to load");
    }

    pub fn on_primary_click(&mut self, pointer: PointerPosition, frame: FrameRect) {
        self.zoom.on_primary_click(pointer, frame);
    }

    pub fn on_pointer_move(&mut self, pointer: PointerPosition, frame: FrameRect) {
        self.zoom.on_pointer_move(pointer, frame);
    }

    pub fn on_pointer_leave(&mut self, pointer: PointerPosition, frame: FrameRect) {
        self.zoom.on_pointer_leave(pointer, frame);
    }

    pub fn rotate_clockwise(&mut self) {
        self.compositor.rotate_clockwise();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.compositor.rotate_counter_clockwise();
    }

    /// Saving is offered only once the image is rotated and the surface
    /// shows that rotation.
    pub fn can_save(&self) -> bool {
        self.compositor.rotation_degrees() != 0
            && self.compositor.is_current()
            && self
                .compositor
                .surface()
                .is_some_and(|surface| !surface.is_empty())
    }

    /// Export the surface, pass it to the save handler, then download it.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` only if encoding the surface fails. An
    /// unavailable save is `Ok(SaveOutcome::Unavailable)` and runs neither
    /// handler.
    pub fn save(&mut self) -> Result<SaveOutcome, ExportError> {
        if !self.can_save() {
            tracing::debug!("Save requested while unavailable");
            return Ok(SaveOutcome::Unavailable);
        }
        let Some(surface) = self.compositor.surface() else {
            return Ok(SaveOutcome::Unavailable);
        };

        let artifact = export_surface(surface, &self.config.export_filename)?;
        self.save_handler.on_save(artifact.data_uri());
        self.download_handler.download(&artifact);

        Ok(SaveOutcome::Saved(artifact))
    }
}
