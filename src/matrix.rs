//! 2D affine transform matrix.

use crate::float::Float;
use crate::vec::Vec2;
use core::ops::Mul;

/// Row-major 2x3 affine matrix:
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// |  0   0   1  |
/// ```
///
/// `translate`, `rotate` and `scale` post-multiply, so the last call is the
/// first one applied to a point.
///
/// ```
/// use locus::{Affine2, Vec2};
///
/// let mut m: Affine2<f32> = Affine2::identity();
/// m.translate(Vec2::new(10.0, 0.0));
/// m.scale(Vec2::new(2.0, 2.0));
/// let p = m.transform_point(Vec2::new(1.0, 1.0));
/// assert_eq!(p, Vec2::new(12.0, 2.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine2<F: Float> {
    pub m00: F,
    pub m01: F,
    pub m02: F,
    pub m10: F,
    pub m11: F,
    pub m12: F,
}

impl<F: Float> Affine2<F> {
    pub fn identity() -> Self {
        Affine2 {
            m00: F::one(), m01: F::zero(), m02: F::zero(),
            m10: F::zero(), m11: F::one(), m12: F::zero(),
        }
    }

    pub fn from_translation(t: Vec2<F>) -> Self {
        Affine2 { m02: t.x, m12: t.y, ..Self::identity() }
    }

    pub fn from_rotation(radians: F) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Affine2 {
            m00: c, m01: -s, m02: F::zero(),
            m10: s, m11: c, m12: F::zero(),
        }
    }

    pub fn from_scale(s: Vec2<F>) -> Self {
        Affine2 { m00: s.x, m11: s.y, ..Self::identity() }
    }

    pub fn translate(&mut self, t: Vec2<F>) -> &mut Self {
        *self = *self * Self::from_translation(t);
        self
    }

    pub fn rotate(&mut self, radians: F) -> &mut Self {
        *self = *self * Self::from_rotation(radians);
        self
    }

    pub fn scale(&mut self, s: Vec2<F>) -> &mut Self {
        *self = *self * Self::from_scale(s);
        self
    }

    pub fn transform_point(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            self.m00 * p.x + self.m01 * p.y + self.m02,
            self.m10 * p.x + self.m11 * p.y + self.m12,
        )
    }

    /// Like `transform_point` without the translation column.
    pub fn transform_vector(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    pub fn translation(&self) -> Vec2<F> {
        Vec2::new(self.m02, self.m12)
    }

    pub fn determinant(&self) -> F {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// `None` when the matrix is singular (e.g. a zero scale somewhere in the chain).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.is_near_zero(F::from_f32(1e-12)) {
            return None;
        }
        let inv = F::one() / det;
        let m00 = self.m11 * inv;
        let m01 = -self.m01 * inv;
        let m10 = -self.m10 * inv;
        let m11 = self.m00 * inv;
        Some(Affine2 {
            m00,
            m01,
            m02: -(m00 * self.m02 + m01 * self.m12),
            m10,
            m11,
            m12: -(m10 * self.m02 + m11 * self.m12),
        })
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Affine2<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Affine2 {
            m00: self.m00 * rhs.m00 + self.m01 * rhs.m10,
            m01: self.m00 * rhs.m01 + self.m01 * rhs.m11,
            m02: self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02,
            m10: self.m10 * rhs.m00 + self.m11 * rhs.m10,
            m11: self.m10 * rhs.m01 + self.m11 * rhs.m11,
            m12: self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2<f64>, b: Vec2<f64>) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let m = Affine2::from_rotation(core::f64::consts::FRAC_PI_2);
        assert!(close(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn post_multiply_order() {
        let mut m: Affine2<f64> = Affine2::identity();
        m.translate(Vec2::new(5.0, 0.0)).rotate(core::f64::consts::PI);
        // rotate first, then translate
        assert!(close(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn inverse_round_trip() {
        let mut m: Affine2<f64> = Affine2::identity();
        m.translate(Vec2::new(3.0, -2.0)).rotate(0.7).scale(Vec2::new(2.0, 0.5));
        let inv = m.inverse().unwrap();
        for p in [Vec2::new(0.0, 0.0), Vec2::new(1.5, -4.0), Vec2::new(-10.0, 7.25)] {
            assert!(close(inv.transform_point(m.transform_point(p)), p));
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let m: Affine2<f32> = Affine2::from_scale(Vec2::new(0.0, 1.0));
        assert!(m.inverse().is_none());
    }
}
