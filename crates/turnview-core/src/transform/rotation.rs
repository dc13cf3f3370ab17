//! Rotation geometry: diagonal sizing and angle conversion.
//!
//! A rotated redraw targets a square surface whose side is the source
//! diagonal, so the rotated image never clips no matter the angle:
//! ```text
//! side = ceil(sqrt(w² + h²))
//! ```
//!
//! Stored angles are unbounded; only the visual angle (`degrees mod 360`)
//! is fed to the trig functions.

/// Length of the source diagonal in pixels.
pub fn diagonal_length(width: u32, height: u32) -> f64 {
    let w = width as f64;
    let h = height as f64;
    (w * w + h * h).sqrt()
}

/// Compute the square bounds of a surface that fits the source at any angle.
///
/// # Example
///
/// ```
/// use turnview_core::transform::compute_diagonal_bounds;
///
/// let (w, h) = compute_diagonal_bounds(100, 50);
/// assert_eq!((w, h), (112, 112));
/// ```
pub fn compute_diagonal_bounds(width: u32, height: u32) -> (u32, u32) {
    let side = diagonal_length(width, height).ceil() as u32;
    (side, side)
}

/// Visual angle in `[0, 360)` for an unbounded stored angle.
pub fn visual_angle(degrees: i64) -> i64 {
    degrees.rem_euclid(360)
}

/// Convert a stored angle to radians for drawing.
///
/// Reduces to the visual angle first, so arbitrarily large stored angles
/// keep full trig precision.
pub fn angle_to_radians(degrees: i64) -> f64 {
    visual_angle(degrees) as f64 * std::f64::consts::PI / 180.0
}


// ============================================================================
// Property-Based Tests
// ============================================================================
