//! Decoding encoded image bytes into a [`SourceImage`].

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, SourceImage};

/// Decode PNG or JPEG bytes into an RGBA source image.
///
/// The format is sniffed from the bytes, not from the URL.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized
/// and `DecodeError::CorruptedData` if decoding fails part-way.
pub fn decode_source(url: impl Into<String>, bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    SourceImage::from_rgba_image(url, img.into_rgba8())
}
