//! Canvas-style drawing context.
//!
//! Drawing uses inverse mapping: for every destination pixel center covered
//! by the transformed destination rectangle, we map back into user space and
//! pick the nearest source texel. There is no interpolation, so quarter-turn
//! rotations copy texels exactly.

use super::{Affine, RasterSurface};
use crate::decode::SourceImage;

/// A drawing context borrowing a [`RasterSurface`].
///
/// The transform stack lives only as long as the context; each redraw
/// starts from the identity transform.
pub struct DrawContext<'a> {
    surface: &'a mut RasterSurface,
    transform: Affine,
    stack: Vec<Affine>,
}

impl<'a> DrawContext<'a> {
    /// Create a context with the identity transform.
    pub fn new(surface: &'a mut RasterSurface) -> Self {
        Self {
            surface,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Push the current transform.
    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    /// Pop the most recently saved transform. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    /// Move the origin.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.transform = self.transform.translate(tx, ty);
    }

    /// Rotate the coordinate system clockwise by `radians`.
    pub fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotate(radians);
    }

    /// Clear a user-space rectangle to transparent.
    ///
    /// The cleared area is the device-space bounding box of the transformed
    /// rectangle, which is exact for axis-aligned and quarter-turn transforms.
    pub fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some((x0, y0, x1, y1)) = self.device_bounds(x, y, width, height) else {
            return;
        };
        self.surface.clear_span(x0, y0, x1, y1);
    }

    /// Draw `image` scaled into the user-space rectangle `(dx, dy, dw, dh)`.
    pub fn draw_image(&mut self, image: &SourceImage, dx: f64, dy: f64, dw: f64, dh: f64) {
        if dw <= 0.0 || dh <= 0.0 {
            return;
        }
        let Some(inverse) = self.transform.invert() else {
            return;
        };
        let Some((x0, y0, x1, y1)) = self.device_bounds(dx, dy, dw, dh) else {
            return;
        };

        let (sw, sh) = image.dimensions();
        let scale_x = sw as f64 / dw;
        let scale_y = sh as f64 / dh;

        for py in y0..y1 {
            for px in x0..x1 {
                let (u, v) = inverse.apply(px as f64 + 0.5, py as f64 + 0.5);
                if u < dx || u >= dx + dw || v < dy || v >= dy + dh {
                    continue;
                }

                let sx = (((u - dx) * scale_x).floor() as u32).min(sw - 1);
                let sy = (((v - dy) * scale_y).floor() as u32).min(sh - 1);
                self.surface.blend_pixel(px, py, image.texel(sx, sy));
            }
        }
    }

    /// Device-space pixel bounds of a transformed user rectangle, clipped to
    /// the surface. `None` when nothing is visible.
    fn device_bounds(&self, x: f64, y: f64, w: f64, h: f64) -> Option<(u32, u32, u32, u32)> {
        let corners = [
            self.transform.apply(x, y),
            self.transform.apply(x + w, y),
            self.transform.apply(x, y + h),
            self.transform.apply(x + w, y + h),
        ];

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (cx, cy) in corners {
            min_x = min_x.min(cx);
            min_y = min_y.min(cy);
            max_x = max_x.max(cx);
            max_y = max_y.max(cy);
        }

        let (sw, sh) = (self.surface.width() as f64, self.surface.height() as f64);
        let x0 = min_x.floor().clamp(0.0, sw) as u32;
        let y0 = min_y.floor().clamp(0.0, sh) as u32;
        let x1 = max_x.ceil().clamp(0.0, sw) as u32;
        let y1 = max_y.ceil().clamp(0.0, sh) as u32;

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }
}
