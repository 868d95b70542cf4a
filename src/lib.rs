//! 2D scene placement, verlet node physics and render-mesh helpers.
//!
//! `locus` provides the plain-data side of a 2D sprite scene. Loading
//! textures, parsing sprite sheets and issuing draw calls stay with the host
//! framework; this crate hands it matrices, node positions and vertex lists.
//!
//! # Features
//!
//! - **Hierarchical transforms**: `Locus2D` nodes in a `LocusTree`, composed
//!   parent-first, with detach-and-bake
//! - **Verlet world**: frame-time normalized integration with pluggable
//!   effectors and constraints (`Spring`, `Pin`, `Seek`, `Avoid`, `Drift`)
//! - **Render meshes**: triangle-strip circles, boxes, ribbons and lines
//! - **Retained nodes**: `ShapeNode` and `SimpleButton` with local-space hit testing
//! - **Observable**: Monitor world steps via the `StepObserver` trait
//! - **`no_std` compatible**: Needs only `alloc`

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod matrix;
pub mod rect;
pub mod locus;
pub mod node;
pub mod effector;
pub mod constraint;
pub mod world;
pub mod mesh;
pub mod shape;
pub mod button;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use matrix::Affine2;
pub use rect::Rect;
pub use locus::{Locus2D, LocusId, LocusTree};
pub use node::{Node, NodeId};
pub use effector::{Avoid, Drift, Effector, Seek};
pub use constraint::{Constraint, Pin, Spring};
pub use world::World;
pub use mesh::{RenderMesh2D, Rgba8, Vertex, MAX_CIRCLE_SEGMENTS};
pub use shape::ShapeNode;
pub use button::{ButtonEvent, SimpleButton};
pub use config::WorldConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::{MeshError, PhysicsError, SceneError};
