//! Pointer-driven zoom.
//!
//! Zooming never touches pixels: the view is a CSS background whose size and
//! position are derived from a zoom factor and a focal position, both kept
//! here.
//!
//! # Zoom steps
//!
//! Every primary click adds `zoom_step` to the factor, so with the default
//! step of 2 the reachable factors are 1, 3, 5, 7, ... Clicks compound until
//! the pointer leaves the frame, which resets the factor to 1.

use std::fmt;

/// Focal position in percent of the frame's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for FocalPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FocalPosition {
    /// The frame center, `50% 50%`.
    pub const CENTER: FocalPosition = FocalPosition { x: 50.0, y: 50.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Renders as a CSS `background-position` value, e.g. `25% 75%`.
impl fmt::Display for FocalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

/// A point in the same client coordinate space as [`FrameRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the frame receiving pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A frame can only map pointers if both extents are finite and non-zero.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width == 0.0
            || self.height == 0.0
    }

    /// Map a pointer to percentages of this frame.
    ///
    /// The mapping is linear and unclamped: pointers outside the frame map
    /// outside `[0, 100]`. Returns `None` for a degenerate frame.
    pub fn focal_position(&self, pointer: PointerPosition) -> Option<FocalPosition> {
        if self.is_degenerate() {
            return None;
        }
        Some(FocalPosition {
            x: (pointer.x - self.left) / self.width * 100.0,
            y: (pointer.y - self.top) / self.height * 100.0,
        })
    }
}

/// Effective CSS `background-size` of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundSize {
    /// No magnification, the image covers the frame.
    Cover,
    /// Magnified to the given percentage of the frame.
    Percent(f64),
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundSize::Cover => f.write_str("cover"),
            BackgroundSize::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Zoom factor plus focal position, updated from pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    zoom_factor: u32,
    position: FocalPosition,
    step: u32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ZoomController {
    /// Create an unzoomed controller centered on the frame.
    pub fn new(step: u32) -> Self {
        Self {
            zoom_factor: 1,
            position: FocalPosition::CENTER,
            step,
        }
    }

    /// Current zoom factor, 1 when not zoomed.
    pub fn zoom_factor(&self) -> u32 {
        self.zoom_factor
    }

    /// Current focal position.
    pub fn position(&self) -> FocalPosition {
        self.position
    }

    /// Check if the view is magnified.
    pub fn is_zoomed(&self) -> bool {
        self.zoom_factor > 1
    }

    /// Background size for the current zoom factor.
    pub fn background_size(&self) -> BackgroundSize {
        if self.zoom_factor == 1 {
            BackgroundSize::Cover
        } else {
            BackgroundSize::Percent(self.zoom_factor as f64 * 100.0)
        }
    }

    /// Zoom in one step and refocus on the pointer.
    pub fn on_primary_click(&mut self, pointer: PointerPosition, frame: FrameRect) {
        self.zoom_factor = self.zoom_factor.saturating_add(self.step);
        tracing::debug!(zoom_factor = self.zoom_factor, "Zoomed in");
        self.refocus(pointer, frame);
    }

    /// Follow the pointer while zoomed; ignored otherwise.
    pub fn on_pointer_move(&mut self, pointer: PointerPosition, frame: FrameRect) {
        if self.is_zoomed() {
            self.refocus(pointer, frame);
        }
    }

    /// Reset to no zoom and remember the exit point as the next focus.
    pub fn on_pointer_leave(&mut self, pointer: PointerPosition, frame: FrameRect) {
        self.zoom_factor = 1;
        tracing::debug!("Zoom reset on pointer leave");
        self.refocus(pointer, frame);
    }

    fn refocus(&mut self, pointer: PointerPosition, frame: FrameRect) {
        match frame.focal_position(pointer) {
            Some(position) => {
                tracing::trace!(x = position.x, y = position.y, "Focal position updated");
                self.position = position;
            }
            None => {
                tracing::warn!(
                    width = frame.width,
                    height = frame.height,
                    "Ignoring pointer on degenerate frame"
                );
            }
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
