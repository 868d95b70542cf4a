//! Hooks into the phases of [`World::step`](crate::World::step).

/// Observer for a simulation step. All methods default to no-ops.
pub trait StepObserver {
    /// Effectors ran on one node, before it was integrated.
    fn on_effectors(&mut self, _node: usize) {}

    /// Every node has been integrated.
    fn on_integrate(&mut self) {}

    /// One constraint was applied, in registration order.
    fn on_constraint(&mut self, _index: usize) {}

    fn on_step_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
