//! Constraints relating nodes: springs and pins, relaxed once per step.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::{Node, NodeId};
use crate::vec::Vec2;

/// A relation between nodes, enforced approximately after integration.
///
/// Implementors hold their own [`NodeId`]s and receive the world's node slice.
/// Ids must come from the world the constraint is added to.
pub trait Constraint<F: Float> {
    fn apply(&self, nodes: &mut [Node<F>]);
}

fn check_node<F: Float>(id: NodeId, nodes: &[Node<F>]) -> Result<(), PhysicsError> {
    if id.0 < nodes.len() {
        Ok(())
    } else {
        Err(PhysicsError::NodeOutOfBounds { index: id.0, count: nodes.len() })
    }
}

fn check_stiffness<F: Float>(stiffness: F) -> Result<(), PhysicsError> {
    if stiffness >= F::zero() && stiffness <= F::one() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidStiffness)
    }
}

/// Keeps two nodes near the distance they had when the spring was made.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring<F: Float> {
    pub a: NodeId,
    pub b: NodeId,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> Spring<F> {
    /// Capture the current distance between `a` and `b` as the rest length.
    pub fn between(a: NodeId, b: NodeId, nodes: &[Node<F>], stiffness: F) -> Result<Self, PhysicsError> {
        check_node(a, nodes)?;
        check_node(b, nodes)?;
        check_stiffness(stiffness)?;
        let rest_length = nodes[a.0].pos.distance(nodes[b.0].pos);
        Ok(Spring { a, b, rest_length, stiffness })
    }

    /// Each endpoint moves half the length error along the spring, scaled by
    /// stiffness. Coincident endpoints have no direction and are left alone.
    pub fn solve(&self, nodes: &mut [Node<F>]) {
        let delta = nodes[self.b.0].pos - nodes[self.a.0].pos;
        let distance = delta.length();
        if distance.is_near_zero(F::from_f32(1e-10)) {
            log::warn!("spring {}-{} has coincident endpoints", self.a.0, self.b.0);
            return;
        }
        let offset = self.rest_length - distance;
        let correction = delta * (offset / distance * F::half() * self.stiffness);
        nodes[self.a.0].pos -= correction;
        nodes[self.b.0].pos += correction;
    }
}

impl<F: Float> Constraint<F> for Spring<F> {
    fn apply(&self, nodes: &mut [Node<F>]) {
        self.solve(nodes);
    }
}

/// Pulls one node toward a fixed point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pin<F: Float> {
    pub node: NodeId,
    pub position: Vec2<F>,
    pub stiffness: F,
}

impl<F: Float> Pin<F> {
    /// Validates `node` against the slice it will be solved over.
    pub fn new(node: NodeId, position: Vec2<F>, nodes: &[Node<F>], stiffness: F) -> Result<Self, PhysicsError> {
        check_node(node, nodes)?;
        check_stiffness(stiffness)?;
        Ok(Pin { node, position, stiffness })
    }

    pub fn solve(&self, nodes: &mut [Node<F>]) {
        let node = &mut nodes[self.node.0];
        let correction = self.position - node.pos;
        node.pos += correction * self.stiffness;
    }
}

impl<F: Float> Constraint<F> for Pin<F> {
    fn apply(&self, nodes: &mut [Node<F>]) {
        self.solve(nodes);
    }
}
