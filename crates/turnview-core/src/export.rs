//! Surface export.
//!
//! Serializes a [`RasterSurface`] into a PNG data URI plus the filename to
//! offer for download.

use thiserror::Error;

use crate::encode::{encode_png, parse_data_uri, to_data_uri, DataUriError, EncodeError, PNG_MIME};
use crate::surface::RasterSurface;

/// Errors that can occur while exporting a surface.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The surface could not be encoded.
    #[error("Failed to encode surface: {0}")]
    Encode(#[from] EncodeError),
}

/// A serialized surface, ready to hand to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    data_uri: String,
    filename: String,
}

impl ExportArtifact {
    /// `data:image/png;base64,...` string.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Suggested download filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Decode the PNG bytes back out of the data URI.
    pub fn png_bytes(&self) -> Result<Vec<u8>, DataUriError> {
        parse_data_uri(&self.data_uri).map(|uri| uri.bytes)
    }

    pub fn into_data_uri(self) -> String {
        self.data_uri
    }
}

/// Encode a surface as a PNG data URI.
///
/// # Errors
///
/// Returns `ExportError::Encode` for an empty surface or if PNG encoding
/// fails.
pub fn export_surface(
    surface: &RasterSurface,
    filename: &str,
) -> Result<ExportArtifact, ExportError> {
    let png = encode_png(surface.pixels(), surface.width(), surface.height())?;
    let data_uri = to_data_uri(PNG_MIME, &png);

    tracing::info!(
        width = surface.width(),
        height = surface.height(),
        bytes = png.len(),
        filename,
        "Surface exported"
    );

    Ok(ExportArtifact {
        data_uri,
        filename: filename.to_string(),
    })
}
