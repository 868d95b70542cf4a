//! Verlet nodes: position plus previous position, velocity implied.

use crate::float::Float;
use crate::vec::Vec2;

/// Handle to a node owned by a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A point mass without mass: `pos - ppos` is the distance travelled last step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<F: Float> {
    pub pos: Vec2<F>,
    pub ppos: Vec2<F>,
}

impl<F: Float> Node<F> {
    /// At rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        Node { pos, ppos: pos }
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.ppos
    }

    /// Move without imparting velocity.
    pub fn teleport(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.ppos = pos;
    }

    /// Move and keep the move as velocity for the next step.
    pub fn nudge(&mut self, offset: Vec2<F>) {
        self.pos += offset;
    }

    /// One verlet step. `time_factor` is `dt / previous_dt`; the implied
    /// velocity is rescaled by it so a frame-rate change keeps speed.
    pub(crate) fn integrate(&mut self, time_factor: F, friction: F) {
        let prev = self.pos;
        let velocity = (self.pos - self.ppos) * time_factor;
        let deceleration = (self.ppos - self.pos) * (friction * time_factor);
        self.pos = self.pos + velocity + deceleration;
        self.ppos = prev;
    }
}
