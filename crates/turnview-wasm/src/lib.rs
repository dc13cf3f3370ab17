//! Turnview WASM - WebAssembly bindings for Turnview
//!
//! This crate provides WASM bindings to expose the turnview-core viewer
//! to JavaScript/TypeScript pages.
//!
//! # Module Structure
//!
//! - `viewer` - The zoom/rotate/export component (`JsImageViewer`)
//! - `download` - `onSave` callback and anchor-click download side effects
//! - `types` - WASM-compatible wrapper types for surface data
//! - `encode` - PNG and data-URI encoding bindings
//! - `transform` - Rotation geometry helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageViewer } from '@turnview/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const viewer = new JsImageViewer(src, (data) => console.log(data.length));
//! viewer.load(new Uint8Array(await (await fetch(src)).arrayBuffer()));
//! viewer.rotate_cw();
//! viewer.save();
//! ```

use wasm_bindgen::prelude::*;

mod download;
mod encode;
mod transform;
mod types;
mod viewer;

// Re-export public types
pub use download::{AnchorDownload, JsSaveHandler};
pub use encode::{encode_png, encode_png_data_uri};
pub use transform::{diagonal_side, visual_angle};
pub use types::JsSurface;
pub use viewer::JsImageViewer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
