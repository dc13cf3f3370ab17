//! WASM bindings for rotation geometry.
//!
//! Lets the page size its own preview canvas the same way the compositor
//! sizes the export surface.

use turnview_core::transform::{compute_diagonal_bounds, visual_angle as core_visual_angle};
use wasm_bindgen::prelude::*;

/// Side length of the square surface a rotated `width x height` image needs.
///
/// # Example (TypeScript)
///
/// ```typescript
/// canvas.width = canvas.height = diagonal_side(img.naturalWidth, img.naturalHeight);
/// ```
#[wasm_bindgen]
pub fn diagonal_side(width: u32, height: u32) -> u32 {
    compute_diagonal_bounds(width, height).0
}

/// Visual angle in `[0, 360)` for an unbounded stored angle.
#[wasm_bindgen]
pub fn visual_angle(degrees: i32) -> i32 {
    core_visual_angle(degrees as i64) as i32
}
