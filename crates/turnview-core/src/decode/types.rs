//! Core types for source image decoding.

use thiserror::Error;

/// Error types for source decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedData(String),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// An immutable source image with RGBA pixel data.
///
/// The viewer only ever reads from a source; it is handed over once the
/// caller has finished loading it and its natural dimensions are known.
#[derive(Debug, Clone)]
pub struct SourceImage {
    url: String,
    width: u32,
    height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a source from raw RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidDimensions` for a zero-sized image and
    /// `DecodeError::InvalidPixelData` if the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(
        url: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            url: url.into(),
            width,
            height,
            pixels,
        })
    }

    /// Create a source from an `image::RgbaImage`.
    pub fn from_rgba_image(
        url: impl Into<String>,
        img: image::RgbaImage,
    ) -> Result<Self, DecodeError> {
        let (width, height) = img.dimensions();
        Self::from_rgba(url, width, height, img.into_raw())
    }

    /// The URL the image was loaded from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one RGBA texel. Caller guarantees `x < width` and `y < height`.
    #[inline]
    pub(crate) fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}
