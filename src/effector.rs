//! Per-node behaviors run before integration: seek, avoid, drift.
//!
//! Effectors act on one node at a time and change `pos` only, so whatever they
//! add becomes velocity in the following verlet step.

use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec2;

/// A force-like behavior applied to every node each step.
pub trait Effector<F: Float> {
    fn apply(&self, node: &mut Node<F>);
}

/// Moves nodes a fraction of the way toward `target` each step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seek<F: Float> {
    pub target: Vec2<F>,
    /// Fraction of the remaining distance covered per step.
    pub strength: F,
}

impl<F: Float> Seek<F> {
    pub fn new(target: Vec2<F>, strength: F) -> Self {
        Seek { target, strength }
    }
}

impl<F: Float> Effector<F> for Seek<F> {
    fn apply(&self, node: &mut Node<F>) {
        node.pos += (self.target - node.pos) * self.strength;
    }
}

/// Pushes nodes out of a circle around `point`, harder near the center.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Avoid<F: Float> {
    pub point: Vec2<F>,
    pub radius: F,
    pub strength: F,
}

impl<F: Float> Avoid<F> {
    pub fn new(point: Vec2<F>, radius: F, strength: F) -> Self {
        Avoid { point, radius, strength }
    }
}

impl<F: Float> Effector<F> for Avoid<F> {
    fn apply(&self, node: &mut Node<F>) {
        let away = node.pos - self.point;
        let distance = away.length();
        if distance >= self.radius || distance.is_near_zero(F::from_f32(1e-10)) {
            return;
        }
        let falloff = F::one() - distance / self.radius;
        node.pos += away * (falloff * self.strength / distance);
    }
}

/// Constant displacement per step, e.g. gravity or wind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drift<F: Float> {
    pub offset: Vec2<F>,
}

impl<F: Float> Drift<F> {
    pub fn new(offset: Vec2<F>) -> Self {
        Drift { offset }
    }
}

impl<F: Float> Effector<F> for Drift<F> {
    fn apply(&self, node: &mut Node<F>) {
        node.pos += self.offset;
    }
}
