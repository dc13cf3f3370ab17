//! Base64 data URIs.
//!
//! The export artifact is a `data:image/png;base64,...` string, which can be
//! assigned directly to an `<img src>` or an `<a href>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// MIME type of exported surfaces.
pub const PNG_MIME: &str = "image/png";

/// Errors that can occur while parsing a data URI.
#[derive(Debug, Error)]
pub enum DataUriError {
    /// The string does not start with `data:`.
    #[error("Not a data URI")]
    NotDataUri,

    /// No comma separating the metadata from the payload.
    #[error("Invalid data URI: missing comma")]
    MissingComma,

    /// The payload is not base64 encoded.
    #[error("Unsupported data URI encoding: expected base64")]
    NotBase64,

    /// The base64 payload could not be decoded.
    #[error("Failed to decode base64: {0}")]
    InvalidBase64(String),
}

/// A parsed data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// MIME type from the metadata section (may be empty).
    pub mime: String,
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
}

/// Build a base64 data URI for the given MIME type and payload.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Parse a base64 data URI back into its MIME type and payload.
///
/// # Errors
///
/// See [`DataUriError`]. Percent-encoded payloads are not supported.
pub fn parse_data_uri(uri: &str) -> Result<DataUri, DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::NotDataUri)?;
    let (metadata, payload) = rest.split_once(',').ok_or(DataUriError::MissingComma)?;

    let mime = metadata
        .strip_suffix(";base64")
        .ok_or(DataUriError::NotBase64)?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DataUriError::InvalidBase64(e.to_string()))?;

    Ok(DataUri {
        mime: mime.to_string(),
        bytes,
    })
}
