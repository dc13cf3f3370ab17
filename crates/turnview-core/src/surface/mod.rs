//! Offscreen raster surface and a canvas-style drawing context over it.
//!
//! The surface is an RGBA8 buffer that starts out fully transparent. Like an
//! HTML canvas, resizing it discards its contents.
//!
//! Drawing goes through a [`DrawContext`], which carries the current
//! transform and a save/restore stack:
//!
//! ```ignore
//! let mut ctx = DrawContext::new(&mut surface);
//! ctx.save();
//! ctx.translate(cx, cy);
//! ctx.rotate(angle.to_radians());
//! ctx.draw_image(&source, -w / 2.0, -h / 2.0, w, h);
//! ctx.restore();
//! ```

mod affine;
mod context;

use thiserror::Error;

pub use affine::Affine;
pub use context::DrawContext;

/// Largest surface that will be allocated, in pixels (256 MiB of RGBA).
pub const MAX_SURFACE_PIXELS: u64 = 1 << 26;

/// Errors that can occur while sizing a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("Surface {width}x{height} exceeds the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u64 },
}

/// Byte length of a `width` x `height` RGBA buffer, if it is allocatable.
fn buffer_len(width: u32, height: u32) -> Result<usize, SurfaceError> {
    let too_large = || SurfaceError::TooLarge {
        width,
        height,
        max: MAX_SURFACE_PIXELS,
    };
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_SURFACE_PIXELS {
        return Err(too_large());
    }
    pixels
        .checked_mul(4)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or_else(too_large)
}

/// An owned RGBA8 pixel buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Create a transparent surface.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::TooLarge` above [`MAX_SURFACE_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; len],
        })
    }

    /// Resize the surface. Contents are always discarded, even when the
    /// dimensions are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::TooLarge` above [`MAX_SURFACE_PIXELS`]. The
    /// surface is left untouched in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let len = buffer_len(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(len, 0);
        Ok(())
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surface `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Check if the surface has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Count of pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Reset every pixel in the device-space rectangle `[x0, x1) × [y0, y1)`
    /// to transparent. Bounds must already be clipped.
    pub(crate) fn clear_span(&mut self, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            self.pixels[start..end].fill(0);
        }
    }

    /// Composite `src` over the pixel at `(x, y)`. Bounds must already be
    /// checked.
    #[inline]
    pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let idx = self.index(x, y);
        let sa = src[3];
        if sa == 255 {
            self.pixels[idx..idx + 4].copy_from_slice(&src);
            return;
        }
        if sa == 0 {
            return;
        }

        let dst = &mut self.pixels[idx..idx + 4];
        let sa_f = sa as f32 / 255.0;
        let da_f = dst[3] as f32 / 255.0;
        let out_a = sa_f + da_f * (1.0 - sa_f);

        for i in 0..3 {
            let c = (src[i] as f32 * sa_f + dst[i] as f32 * da_f * (1.0 - sa_f)) / out_a;
            dst[i] = c.clamp(0.0, 255.0).round() as u8;
        }
        dst[3] = (out_a * 255.0).clamp(0.0, 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let surface = RasterSurface::new(4, 3).unwrap();
        assert_eq!(surface.dimensions(), (4, 3));
        assert_eq!(surface.pixels().len(), 48);
        assert_eq!(surface.opaque_pixel_count(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        let surface = RasterSurface::default();
        assert!(surface.is_empty());
        assert!(surface.pixels().is_empty());
    }

    #[test]
    fn test_resize_discards_content() {
        let mut surface = RasterSurface::new(2, 2).unwrap();
        surface.blend_pixel(1, 1, [255, 0, 0, 255]);
        assert_eq!(surface.opaque_pixel_count(), 1);

        surface.resize(2, 2).unwrap();
        assert_eq!(surface.opaque_pixel_count(), 0);

        surface.resize(5, 7).unwrap();
        assert_eq!(surface.dimensions(), (5, 7));
        assert_eq!(surface.pixels().len(), 5 * 7 * 4);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let surface = RasterSurface::new(2, 2).unwrap();
        assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(2, 0), None);
        assert_eq!(surface.pixel(0, 2), None);
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let mut surface = RasterSurface::new(1, 1).unwrap();
        surface.blend_pixel(0, 0, [10, 20, 30, 255]);
        surface.blend_pixel(0, 0, [40, 50, 60, 255]);
        assert_eq!(surface.pixel(0, 0), Some([40, 50, 60, 255]));
    }

    #[test]
    fn test_blend_transparent_is_noop() {
        let mut surface = RasterSurface::new(1, 1).unwrap();
        surface.blend_pixel(0, 0, [10, 20, 30, 255]);
        surface.blend_pixel(0, 0, [200, 200, 200, 0]);
        assert_eq!(surface.pixel(0, 0), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_blend_half_over_transparent() {
        let mut surface = RasterSurface::new(1, 1).unwrap();
        surface.blend_pixel(0, 0, [200, 100, 50, 128]);
        // Over a transparent pixel the color comes through unchanged
        assert_eq!(surface.pixel(0, 0), Some([200, 100, 50, 128]));
    }

    #[test]
    fn test_blend_half_over_opaque() {
        let mut surface = RasterSurface::new(1, 1).unwrap();
        surface.blend_pixel(0, 0, [0, 0, 0, 255]);
        surface.blend_pixel(0, 0, [255, 255, 255, 128]);
        let p = surface.pixel(0, 0).unwrap();
        assert_eq!(p[3], 255);
        assert!(p[0] > 120 && p[0] < 135, "got {}", p[0]);
    }

    #[test]
    fn test_clear_span() {
        let mut surface = RasterSurface::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                surface.blend_pixel(x, y, [1, 2, 3, 255]);
            }
        }
        surface.clear_span(0, 0, 2, 2);
        assert_eq!(surface.opaque_pixel_count(), 5);
        assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(2, 2), Some([1, 2, 3, 255]));
    }

    #[test]
    fn test_new_rejects_oversized() {
        let err = RasterSurface::new(40001, 40001).unwrap_err();
        assert_eq!(
            err,
            SurfaceError::TooLarge {
                width: 40001,
                height: 40001,
                max: MAX_SURFACE_PIXELS,
            }
        );
        assert!(RasterSurface::new(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(buffer_len(8192, 8192), Ok(8192 * 8192 * 4));
        assert!(buffer_len(8192, 8193).is_err());
    }

    #[test]
    fn test_failed_resize_keeps_contents() {
        let mut surface = RasterSurface::new(2, 2).unwrap();
        surface.blend_pixel(0, 0, [9, 9, 9, 255]);

        assert!(surface.resize(40001, 40001).is_err());
        assert_eq!(surface.dimensions(), (2, 2));
        assert_eq!(surface.pixel(0, 0), Some([9, 9, 9, 255]));
    }
}
