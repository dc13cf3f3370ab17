//! Source image decoding.
//!
//! The viewer works on RGBA pixels so that the transparent margins of a
//! rotated surface survive export. Encoded bytes (PNG or JPEG) are decoded
//! once, when the caller signals that the image has loaded.
//!
//! # Examples
//!
//! ```ignore
//! use turnview_core::decode::decode_source;
//!
//! let bytes = std::fs::read("car.jpg").unwrap();
//! let source = decode_source("car.jpg", &bytes).unwrap();
//! println!("Loaded {}x{} image", source.width(), source.height());
//! ```

mod source;
mod types;

pub use source::decode_source;
pub use types::{DecodeError, SourceImage};
