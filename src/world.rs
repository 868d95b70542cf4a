//! Verlet world: owns nodes, effectors and constraints and steps them together.

use crate::config::WorldConfig;
use crate::constraint::{Constraint, Pin, Spring};
use crate::effector::Effector;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::{Node, NodeId};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Minimal verlet particle system.
///
/// Each [`step`](World::step) runs every effector on each node and integrates
/// it, then applies every constraint once in registration order.
///
/// A [`NodeId`] is a plain index and does not record which world made it.
/// [`connect`](World::connect) and [`pin`](World::pin) only reject ids past
/// the end of this world's node list; an in-range id taken from another
/// world is accepted and names whichever node sits at that index here.
///
/// ```
/// use locus::{Vec2, World, WorldConfig};
///
/// let mut world: World<f32> = World::new(WorldConfig::new().with_friction(0.0));
/// let a = world.create_node();
/// let b = world.create_node();
/// world.node_mut(b).teleport(Vec2::new(10.0, 0.0));
/// world.connect(a, b, 0.5).unwrap();
///
/// world.node_mut(b).nudge(Vec2::new(2.0, 0.0));
/// world.step(1.0 / 60.0);
/// assert!(world.node(b).pos.x > 10.0);
/// ```
pub struct World<F: Float> {
    nodes: AllocVec<Node<F>>,
    effectors: AllocVec<Box<dyn Effector<F>>>,
    constraints: AllocVec<Box<dyn Constraint<F>>>,
    friction: F,
    previous_dt: F,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        World {
            nodes: AllocVec::new(),
            effectors: AllocVec::new(),
            constraints: AllocVec::new(),
            friction: config.friction,
            previous_dt: config.initial_dt,
        }
    }

    /// New node at the origin, at rest.
    pub fn create_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Vec2::zero()));
        id
    }

    /// The node closest to `pos`, or `None` in an empty world. Ties go to the
    /// earliest-created node. Nodes at a non-finite distance are skipped.
    pub fn nearest_node(&self, pos: Vec2<F>) -> Option<NodeId> {
        let mut nearest: Option<(usize, F)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = node.pos.distance_sq(pos);
            if !d.is_finite() {
                continue;
            }
            match nearest {
                Some((_, best)) if !(d < best) => {}
                _ => nearest = Some((i, d)),
            }
        }
        nearest.map(|(i, _)| NodeId(i))
    }

    pub fn add_effector<E: Effector<F> + 'static>(&mut self, effector: E) {
        self.effectors.push(Box::new(effector));
    }

    pub fn add_constraint<C: Constraint<F> + 'static>(&mut self, constraint: C) {
        self.constraints.push(Box::new(constraint));
    }

    /// Join `a` and `b` with a [`Spring`] at their current distance.
    pub fn connect(&mut self, a: NodeId, b: NodeId, stiffness: F) -> Result<(), PhysicsError> {
        let spring = Spring::between(a, b, &self.nodes, stiffness)?;
        log::debug!("spring {}-{} rest length {:?}", a.0, b.0, spring.rest_length);
        self.add_constraint(spring);
        Ok(())
    }

    /// Pull `node` toward `position` with a [`Pin`].
    pub fn pin(&mut self, node: NodeId, position: Vec2<F>, stiffness: F) -> Result<(), PhysicsError> {
        let pin = Pin::new(node, position, &self.nodes, stiffness)?;
        log::debug!("pin {} at {:?}", node.0, position);
        self.add_constraint(pin);
        Ok(())
    }

    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// [`step`](World::step) reporting each phase to `observer`.
    ///
    /// A zero, negative or non-finite `dt` is a paused frame: nothing runs and
    /// the previous frame time is kept.
    pub fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !(dt.is_finite() && dt > F::zero()) {
            log::warn!("skipping world step with dt {:?}", dt);
            return;
        }
        // One normalization for the whole step so every node sees the same frame time.
        let time_factor = dt / self.previous_dt;

        for (i, node) in self.nodes.iter_mut().enumerate() {
            for effector in self.effectors.iter() {
                effector.apply(node);
            }
            observer.on_effectors(i);
            node.integrate(time_factor, self.friction);
        }
        self.previous_dt = dt;
        observer.on_integrate();

        for (i, constraint) in self.constraints.iter().enumerate() {
            constraint.apply(&mut self.nodes);
            observer.on_constraint(i);
        }

        log::trace!(
            "world step dt {:?}: {} nodes, {} effectors, {} constraints",
            dt,
            self.nodes.len(),
            self.effectors.len(),
            self.constraints.len()
        );
        observer.on_step_complete();
    }

    pub fn node(&self, id: NodeId) -> &Node<F> { &self.nodes[id.0] }
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<F> { &mut self.nodes[id.0] }
    pub fn get(&self, id: NodeId) -> Option<&Node<F>> { self.nodes.get(id.0) }
    pub fn nodes(&self) -> &[Node<F>] { &self.nodes }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn effector_count(&self) -> usize { self.effectors.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    pub fn friction(&self) -> F { self.friction }

    /// Non-finite values are rejected; others are clamped to [0, 1].
    pub fn set_friction(&mut self, friction: F) -> Result<(), PhysicsError> {
        if !friction.is_finite() {
            return Err(PhysicsError::InvalidFriction);
        }
        self.friction = friction.clamp(F::zero(), F::one());
        log::debug!("world friction -> {:?}", self.friction);
        Ok(())
    }

    /// Frame time the next step is normalized against.
    pub fn previous_dt(&self) -> F { self.previous_dt }

    pub fn clear_effectors(&mut self) {
        self.effectors.clear();
    }

    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
