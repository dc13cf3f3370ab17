//! Turnview Core - zoomable, rotatable image viewer
//!
//! This crate provides the core logic behind the Turnview viewer widget:
//! pointer-driven zoom focus, quarter-turn rotation composited onto an
//! offscreen raster surface, and PNG export of the rotated bitmap.
//!
//! # Module Structure
//!
//! - `zoom` - Zoom factor and focal position from pointer events
//! - `surface` - RGBA raster surface and canvas-style drawing context
//! - `transform` - Diagonal sizing and angle conversion
//! - `compositor` - Rotation state and surface redraws
//! - `decode` / `encode` - Source decoding, PNG encoding, data URIs
//! - `export` - Surface to data-URI export
//! - `viewer` - The component tying it all together
//! - `config` - Viewer tunables

pub mod compositor;
pub mod config;
pub mod decode;
pub mod encode;
pub mod export;
pub mod surface;
pub mod transform;
pub mod viewer;
pub mod zoom;

pub use compositor::{CompositorState, RotationCompositor};
pub use config::{Centering, ClearRegion, ConfigError, ViewerConfig};
pub use decode::{decode_source, DecodeError, SourceImage};
pub use export::{export_surface, ExportArtifact, ExportError};
pub use surface::{DrawContext, RasterSurface, SurfaceError, MAX_SURFACE_PIXELS};
pub use viewer::{
    DownloadHandler, ImageViewer, NoDownload, SaveHandler, SaveOutcome, ViewState, ViewStyle,
};
pub use zoom::{BackgroundSize, FocalPosition, FrameRect, PointerPosition, ZoomController};
