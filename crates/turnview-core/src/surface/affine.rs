//! 2D affine transforms in canvas order.
//!
//! A transform `[a, b, c, d, e, f]` maps a user-space point to device space:
//! ```text
//! x' = a * x + c * y + e
//! y' = b * x + d * y + f
//! ```

/// Trig values within this distance of an integer are snapped to it, so
/// quarter turns produce exact 0/±1 matrices.
const SNAP_EPSILON: f64 = 1e-9;

/// A 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Post-multiply by a translation.
    pub fn translate(self, tx: f64, ty: f64) -> Affine {
        Affine {
            e: self.e + self.a * tx + self.c * ty,
            f: self.f + self.b * tx + self.d * ty,
            ..self
        }
    }

    /// Post-multiply by a clockwise (in y-down device space) rotation.
    pub fn rotate(self, radians: f64) -> Affine {
        let cos = snap(radians.cos());
        let sin = snap(radians.sin());
        Affine {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a user-space point to device space.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Inverse transform, or `None` if the matrix is singular.
    pub fn invert(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        Some(Affine {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }
}

#[inline]
fn snap(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPSILON {
        r
    } else {
        v
    }
}
