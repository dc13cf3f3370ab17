//! Image encoding WASM bindings.
//!
//! This module exposes the turnview-core PNG and data-URI helpers to JavaScript.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGBA pixel data to PNG bytes
//! - [`encode_png_data_uri`] - Encode RGBA pixel data straight to a data URI
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_data_uri } from '@turnview/wasm';
//!
//! const uri = encode_png_data_uri(imageData.data, imageData.width, imageData.height);
//! resultImg.src = uri;
//! ```

use turnview_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGBA pixel data to a `data:image/png;base64,...` string.
#[wasm_bindgen]
pub fn encode_png_data_uri(pixels: &[u8], width: u32, height: u32) -> Result<String, JsValue> {
    encode::encode_png(pixels, width, height)
        .map(|png| encode::to_data_uri(encode::PNG_MIME, &png))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let png = encode_png(&[128u8; 10 * 10 * 4], 10, 10).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        assert!(encode_png(&[128u8; 10 * 10 * 3], 10, 10).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_data_uri() {
        let uri = encode_png_data_uri(&[0u8; 4], 1, 1).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
