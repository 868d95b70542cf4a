//! Error types for scene, physics and mesh operations.

use thiserror::Error;

/// Errors from building or configuring a physics [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("stiffness must be in [0, 1]")]
    InvalidStiffness,
    #[error("friction must be finite")]
    InvalidFriction,
    #[error("node index {index} out of bounds (count: {count})")]
    NodeOutOfBounds { index: usize, count: usize },
}

/// Errors from editing a [`LocusTree`](crate::LocusTree).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("locus index {index} out of bounds (count: {count})")]
    UnknownLocus { index: usize, count: usize },
    #[error("parent assignment would create a cycle")]
    ParentCycle,
}

/// Errors from shaping a [`RenderMesh2D`](crate::RenderMesh2D).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("ribbon skeleton needs at least 2 points, got {len}")]
    SkeletonTooShort { len: usize },
    #[error("circle radius must be finite")]
    NonFiniteRadius,
    #[error("circle with {segments} segments exceeds the limit of {max}")]
    TooManySegments { segments: usize, max: usize },
}
