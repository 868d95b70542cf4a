//! Axis-aligned rectangles for mesh bounds and button hit areas.

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned rectangle spanning `(x1, y1)` to `(x2, y2)`, y pointing down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<F: Float> {
    pub x1: F,
    pub y1: F,
    pub x2: F,
    pub y2: F,
}

impl<F: Float> Rect<F> {
    pub fn new(x1: F, y1: F, x2: F, y2: F) -> Self {
        Rect { x1, y1, x2, y2 }
    }

    /// Rect at the origin with the given size.
    pub fn from_size(size: Vec2<F>) -> Self {
        Rect::new(F::zero(), F::zero(), size.x, size.y)
    }

    pub fn width(&self) -> F { self.x2 - self.x1 }
    pub fn height(&self) -> F { self.y2 - self.y1 }
    pub fn size(&self) -> Vec2<F> { Vec2::new(self.width(), self.height()) }

    pub fn center(&self) -> Vec2<F> {
        Vec2::new((self.x1 + self.x2) * F::half(), (self.y1 + self.y2) * F::half())
    }

    pub fn upper_left(&self) -> Vec2<F> { Vec2::new(self.x1, self.y1) }
    pub fn upper_right(&self) -> Vec2<F> { Vec2::new(self.x2, self.y1) }
    pub fn lower_left(&self) -> Vec2<F> { Vec2::new(self.x1, self.y2) }
    pub fn lower_right(&self) -> Vec2<F> { Vec2::new(self.x2, self.y2) }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }

    /// Grow each side outward by `horizontal` / `vertical`.
    pub fn inflate(&self, horizontal: F, vertical: F) -> Self {
        Rect::new(
            self.x1 - horizontal,
            self.y1 - vertical,
            self.x2 + horizontal,
            self.y2 + vertical,
        )
    }

    pub fn offset(&self, by: Vec2<F>) -> Self {
        Rect::new(self.x1 + by.x, self.y1 + by.y, self.x2 + by.x, self.y2 + by.y)
    }

    /// Scale `self` uniformly to fit inside `other` keeping aspect ratio, centered.
    /// When `expand` is false a rect that already fits keeps its size.
    pub fn centered_fit(&self, other: &Rect<F>, expand: bool) -> Self {
        let (w, h) = (self.width(), self.height());
        if w.is_near_zero(F::from_f32(1e-12)) || h.is_near_zero(F::from_f32(1e-12)) {
            let c = other.center();
            return Rect::new(c.x, c.y, c.x, c.y);
        }
        let mut ratio = (other.width() / w).min(other.height() / h);
        if !expand && ratio > F::one() {
            ratio = F::one();
        }
        let half = Vec2::new(w * ratio, h * ratio) * F::half();
        let c = other.center();
        Rect::new(c.x - half.x, c.y - half.y, c.x + half.x, c.y + half.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_shrinks_oversized() {
        let big = Rect::new(0.0f32, 0.0, 200.0, 100.0);
        let slot = Rect::new(0.0f32, 0.0, 100.0, 100.0);
        let fit = big.centered_fit(&slot, false);
        assert_eq!(fit, Rect::new(0.0, 25.0, 100.0, 75.0));
    }

    #[test]
    fn fit_without_expand_keeps_small_size() {
        let small = Rect::new(0.0f32, 0.0, 10.0, 20.0);
        let slot = Rect::new(0.0f32, 0.0, 100.0, 100.0);
        let fit = small.centered_fit(&slot, false);
        assert_eq!(fit, Rect::new(45.0, 40.0, 55.0, 60.0));
        let grown = small.centered_fit(&slot, true);
        assert_eq!(grown, Rect::new(25.0, 0.0, 75.0, 100.0));
    }

    #[test]
    fn inflate_and_contains() {
        let r = Rect::new(0.0f32, 0.0, 10.0, 10.0).inflate(5.0, 2.0);
        assert!(r.contains(Vec2::new(-5.0, -2.0)));
        assert!(!r.contains(Vec2::new(0.0, -3.0)));
    }
}
