//! Rotation compositor.
//!
//! Owns the source image and the offscreen [`RasterSurface`], and redraws the
//! surface exactly once after every committed angle change.
//!
//! # Lifecycle
//!
//! ```text
//! Unloaded --load--> Loaded (natural size) --rotate--> Rotated(θ) --rotate--> Rotated(θ±90) ...
//! ```
//!
//! Rotating before a source has loaded only updates the angle; the redraw is
//! deferred until `load`, which then draws the rotated surface straight
//! after the baseline.
//!
//! Surfaces over [`MAX_SURFACE_PIXELS`](crate::surface::MAX_SURFACE_PIXELS)
//! are never allocated. The draw is skipped with a warning and the previous
//! surface stays, so [`RotationCompositor::is_current`] reports whether the
//! surface actually shows the stored angle.

use crate::config::{Centering, ClearRegion, ViewerConfig};
use crate::decode::SourceImage;
use crate::surface::{DrawContext, RasterSurface};
use crate::transform::{angle_to_radians, compute_diagonal_bounds};

/// Observable compositor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositorState {
    /// No source yet.
    Unloaded,
    /// Baseline draw at the source's natural size.
    Loaded,
    /// Drawn onto a diagonal-sized surface at the given angle.
    Rotated(i64),
}

/// Rotates a source image onto an owned raster surface.
#[derive(Debug, Clone)]
pub struct RotationCompositor {
    rotation_degrees: i64,
    drawn_degrees: i64,
    step: i64,
    centering: Centering,
    clear_region: ClearRegion,
    source: Option<SourceImage>,
    surface: Option<RasterSurface>,
    redraws: u64,
}

impl Default for RotationCompositor {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl RotationCompositor {
    /// Create an unloaded compositor at angle 0.
    ///
    /// `config` is expected to have passed [`ViewerConfig::validate`].
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            rotation_degrees: 0,
            drawn_degrees: 0,
            step: config.rotation_step,
            centering: config.centering,
            clear_region: config.clear_region,
            source: None,
            surface: None,
            redraws: 0,
        }
    }

    /// Stored rotation angle. Never normalized.
    pub fn rotation_degrees(&self) -> i64 {
        self.rotation_degrees
    }

    /// The loaded source, if any.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// The raster surface, once a source has loaded.
    pub fn surface(&self) -> Option<&RasterSurface> {
        self.surface.as_ref()
    }

    /// Number of rotated redraws performed so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Whether a surface exists and was drawn at the stored angle.
    pub fn is_current(&self) -> bool {
        self.surface.is_some() && self.drawn_degrees == self.rotation_degrees
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CompositorState {
        match (&self.source, self.rotation_degrees) {
            (None, _) => CompositorState::Unloaded,
            (Some(_), 0) if self.redraws == 0 => CompositorState::Loaded,
            (Some(_), angle) => CompositorState::Rotated(angle),
        }
    }

    /// Take ownership of a loaded source and draw the baseline.
    ///
    /// The baseline surface has the source's natural dimensions with the
    /// image drawn at the origin. A pending non-zero angle is applied right
    /// after. A source too large to rasterize is dropped and the compositor
    /// keeps its previous state.
    pub fn load(&mut self, source: SourceImage) {
        let (width, height) = source.dimensions();
        tracing::debug!(url = source.url(), width, height, "Source loaded");

        let mut surface = match RasterSurface::new(width, height) {
            Ok(surface) => surface,
            Err(error) => {
                tracing::warn!(url = source.url(), %error, "Source too large, not drawn");
                return;
            }
        };
        DrawContext::new(&mut surface).draw_image(
            &source,
            0.0,
            0.0,
            width as f64,
            height as f64,
        );

        self.surface = Some(surface);
        self.source = Some(source);
        self.redraws = 0;
        self.drawn_degrees = 0;

        if self.rotation_degrees != 0 {
            self.redraw();
        }
    }

    /// Rotate one step clockwise and redraw.
    pub fn rotate_clockwise(&mut self) {
        self.set_rotation(self.rotation_degrees.saturating_add(self.step));
    }

    /// Rotate one step counter-clockwise and redraw.
    pub fn rotate_counter_clockwise(&mut self) {
        self.set_rotation(self.rotation_degrees.saturating_sub(self.step));
    }

    fn set_rotation(&mut self, degrees: i64) {
        if degrees == self.rotation_degrees {
            return;
        }
        self.rotation_degrees = degrees;
        tracing::debug!(rotation_degrees = degrees, "Rotation changed");
        self.redraw();
    }

    /// Redraw the surface at the current angle.
    ///
    /// No-op until a source has loaded, or when the diagonal surface would
    /// be too large to allocate.
    pub fn redraw(&mut self) {
        let (Some(source), Some(surface)) = (self.source.as_ref(), self.surface.as_mut()) else {
            tracing::debug!("Redraw skipped: source not loaded");
            return;
        };

        let (width, height) = source.dimensions();
        let (w, h) = (width as f64, height as f64);
        let (side, _) = compute_diagonal_bounds(width, height);

        if let Err(error) = surface.resize(side, side) {
            tracing::warn!(
                rotation_degrees = self.rotation_degrees,
                %error,
                "Rotated surface too large, redraw skipped"
            );
            return;
        }

        let mut ctx = DrawContext::new(surface);
        match self.clear_region {
            ClearRegion::FullSurface => ctx.clear_rect(0.0, 0.0, side as f64, side as f64),
            ClearRegion::SourceBounds => ctx.clear_rect(0.0, 0.0, w, h),
        }

        ctx.save();
        ctx.translate(side as f64 / 2.0, side as f64 / 2.0);
        ctx.rotate(angle_to_radians(self.rotation_degrees));

        let offset_y = match self.centering {
            Centering::Centered => h / 2.0,
            Centering::WidthBased => w / 2.0,
        };
        ctx.draw_image(source, -w / 2.0, -offset_y, w, h);
        ctx.restore();

        self.redraws += 1;
        self.drawn_degrees = self.rotation_degrees;
        tracing::debug!(
            rotation_degrees = self.rotation_degrees,
            side,
            "Surface redrawn"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    /// Opaque source whose left half is red and right half blue.
    fn split_source(width: u32, height: u32) -> SourceImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(if x < width / 2 { &RED } else { &BLUE });
            }
        }
        SourceImage::from_rgba("split.png", width, height, pixels).unwrap()
    }

    fn loaded(width: u32, height: u32) -> RotationCompositor {
        let mut comp = RotationCompositor::default();
        comp.load(split_source(width, height));
        comp
    }

    #[test]
    fn test_unloaded_state() {
        let comp = RotationCompositor::default();
        assert_eq!(comp.state(), CompositorState::Unloaded);
        assert!(comp.surface().is_none());
        assert_eq!(comp.rotation_degrees(), 0);
    }

    #[test]
    fn test_baseline_draw_natural_size() {
        let comp = loaded(100, 50);
        let surface = comp.surface().unwrap();
        assert_eq!(comp.state(), CompositorState::Loaded);
        assert_eq!(surface.dimensions(), (100, 50));
        assert_eq!(surface.pixels(), comp.source().unwrap().pixels());
    }

    #[test]
    fn test_rotate_before_load_only_tracks_angle() {
        let mut comp = RotationCompositor::default();
        comp.rotate_clockwise();
        assert_eq!(comp.rotation_degrees(), 90);
        assert_eq!(comp.redraw_count(), 0);
        assert!(comp.surface().is_none());

        comp.load(split_source(100, 50));
        assert_eq!(comp.redraw_count(), 1);
        assert_eq!(comp.surface().unwrap().dimensions(), (112, 112));
        assert_eq!(comp.state(), CompositorState::Rotated(90));
    }

    #[test]
    fn test_rotate_clockwise_resizes_to_diagonal() {
        let mut comp = loaded(100, 50);
        comp.rotate_clockwise();

        assert_eq!(comp.rotation_degrees(), 90);
        assert_eq!(comp.surface().unwrap().dimensions(), (112, 112));
        assert_eq!(comp.state(), CompositorState::Rotated(90));
    }

    #[test]
    fn test_one_redraw_per_change() {
        let mut comp = loaded(10, 10);
        comp.rotate_clockwise();
        comp.rotate_clockwise();
        comp.rotate_counter_clockwise();
        assert_eq!(comp.redraw_count(), 3);
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let mut comp = loaded(4, 4);
        for _ in 0..5 {
            comp.rotate_clockwise();
        }
        assert_eq!(comp.rotation_degrees(), 450);

        let mut comp = loaded(4, 4);
        comp.rotate_counter_clockwise();
        assert_eq!(comp.rotation_degrees(), -90);
    }

    #[test]
    fn test_back_to_zero_is_still_rotated() {
        let mut comp = loaded(8, 4);
        comp.rotate_clockwise();
        comp.rotate_counter_clockwise();
        assert_eq!(comp.rotation_degrees(), 0);
        // Drawn on the diagonal surface, not the baseline
        assert_eq!(comp.surface().unwrap().dimensions(), (9, 9));
        assert_eq!(comp.state(), CompositorState::Rotated(0));
    }

    #[test]
    fn test_rotation_preserves_pixel_count() {
        let mut comp = loaded(100, 50);
        for _ in 0..4 {
            comp.rotate_clockwise();
            assert_eq!(comp.surface().unwrap().opaque_pixel_count(), 100 * 50);
        }
    }

    #[test]
    fn test_clockwise_puts_left_half_on_top() {
        // 100x50 on a 112 surface, centered: after 90° CW the image spans
        // x in [31, 81), y in [6, 106). The red (left) half ends up on top.
        let mut comp = loaded(100, 50);
        comp.rotate_clockwise();
        let surface = comp.surface().unwrap();

        assert_eq!(surface.pixel(56, 10), Some(RED));
        assert_eq!(surface.pixel(56, 100), Some(BLUE));
        assert_eq!(surface.pixel(31, 6), Some(RED));
        assert_eq!(surface.pixel(80, 105), Some(BLUE));
        assert_eq!(surface.pixel(30, 56), Some(CLEAR));
        assert_eq!(surface.pixel(81, 56), Some(CLEAR));
        assert_eq!(surface.pixel(56, 5), Some(CLEAR));
        assert_eq!(surface.pixel(56, 106), Some(CLEAR));
    }

    #[test]
    fn test_counter_clockwise_puts_left_half_on_bottom() {
        let mut comp = loaded(100, 50);
        comp.rotate_counter_clockwise();
        let surface = comp.surface().unwrap();

        assert_eq!(surface.pixel(56, 10), Some(BLUE));
        assert_eq!(surface.pixel(56, 100), Some(RED));
    }

    #[test]
    fn test_half_turn_mirrors_horizontally() {
        let mut comp = loaded(100, 50);
        comp.rotate_clockwise();
        comp.rotate_clockwise();
        let surface = comp.surface().unwrap();

        // Image spans x in [6, 106), y in [31, 81)
        assert_eq!(surface.pixel(10, 56), Some(BLUE));
        assert_eq!(surface.pixel(100, 56), Some(RED));
    }

    #[test]
    fn test_width_based_centering_shifts_non_square() {
        let config = ViewerConfig {
            centering: Centering::WidthBased,
            ..ViewerConfig::default()
        };
        let mut comp = RotationCompositor::new(&config);
        comp.load(split_source(100, 50));
        comp.rotate_clockwise();
        let surface = comp.surface().unwrap();

        // Vertical offset of -50 instead of -25: after a quarter turn the
        // image spans x in [56, 106) instead of [31, 81).
        assert_eq!(surface.pixel(40, 56), Some(CLEAR));
        assert_eq!(surface.pixel(60, 10), Some(RED));
        assert_eq!(surface.pixel(105, 100), Some(BLUE));
        assert_eq!(surface.opaque_pixel_count(), 100 * 50);
    }

    #[test]
    fn test_width_based_matches_centered_for_square() {
        let config = ViewerConfig {
            centering: Centering::WidthBased,
            ..ViewerConfig::default()
        };
        let mut legacy = RotationCompositor::new(&config);
        legacy.load(split_source(20, 20));
        legacy.rotate_clockwise();

        let mut centered = loaded(20, 20);
        centered.rotate_clockwise();

        assert_eq!(legacy.surface(), centered.surface());
    }

    #[test]
    fn test_source_bounds_clear_equivalent_on_fresh_surface() {
        let config = ViewerConfig {
            clear_region: ClearRegion::SourceBounds,
            ..ViewerConfig::default()
        };
        let mut a = RotationCompositor::new(&config);
        a.load(split_source(30, 12));
        let mut b = loaded(30, 12);

        for _ in 0..3 {
            a.rotate_clockwise();
            b.rotate_clockwise();
        }
        assert_eq!(a.surface(), b.surface());
    }

    #[test]
    fn test_oversized_diagonal_keeps_previous_surface() {
        // 9000x1 is a small source, but its diagonal square is 9001x9001,
        // which is over the pixel limit.
        let mut comp = loaded(9000, 1);
        assert!(comp.is_current());

        comp.rotate_clockwise();
        assert_eq!(comp.rotation_degrees(), 90);
        assert_eq!(comp.redraw_count(), 0);
        assert_eq!(comp.surface().unwrap().dimensions(), (9000, 1));
        assert!(!comp.is_current());

        comp.rotate_counter_clockwise();
        assert!(comp.is_current());
    }

    #[test]
    fn test_is_current_tracks_redraws() {
        let mut comp = RotationCompositor::default();
        assert!(!comp.is_current());
        comp.rotate_clockwise();
        assert!(!comp.is_current());
        comp.load(split_source(6, 4));
        assert!(comp.is_current());
        comp.rotate_clockwise();
        assert!(comp.is_current());
    }

    #[test]
    fn test_reload_resets_baseline() {
        let mut comp = loaded(10, 10);
        comp.rotate_clockwise();
        comp.rotate_counter_clockwise();
        comp.load(split_source(6, 3));
        assert_eq!(comp.state(), CompositorState::Loaded);
        assert_eq!(comp.surface().unwrap().dimensions(), (6, 3));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
