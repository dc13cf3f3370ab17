//! WASM-compatible wrapper types for surface data.
//!
//! This module provides JavaScript-friendly types that wrap the core Turnview types,
//! handling the conversion between Rust and JavaScript data representations.

use turnview_core::RasterSurface;
use wasm_bindgen::prelude::*;

/// A copy of the compositor's raster surface for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`, which can be wrapped in an `ImageData`
/// and painted onto a canvas.
#[wasm_bindgen]
pub struct JsSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSurface {
    /// Surface width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsSurface {
    /// Snapshot a core surface.
    pub(crate) fn from_surface(surface: &RasterSurface) -> Self {
        Self {
            width: surface.width(),
            height: surface.height(),
            pixels: surface.pixels().to_vec(),
        }
    }
}
