//! Image encoding for export.
//!
//! This module provides functionality for:
//! - Encoding RGBA surfaces to PNG
//! - Wrapping encoded bytes in base64 data URIs
//!
//! # Examples
//!
//! ```ignore
//! use turnview_core::encode::{encode_png, to_data_uri, PNG_MIME};
//!
//! let pixels = vec![0u8; 100 * 100 * 4]; // Transparent image
//! let png = encode_png(&pixels, 100, 100).unwrap();
//! let uri = to_data_uri(PNG_MIME, &png);
//! assert!(uri.starts_with("data:image/png;base64,"));
//! ```

mod data_uri;
mod png;

pub use data_uri::{parse_data_uri, to_data_uri, DataUri, DataUriError, PNG_MIME};
pub use png::{encode_png, EncodeError};
