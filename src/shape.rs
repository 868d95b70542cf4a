//! A placed mesh: a locus plus the shape drawn there.

use crate::float::Float;
use crate::locus::{LocusId, LocusTree};
use crate::mesh::RenderMesh2D;

/// Mesh in local coordinates, placed by a locus.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeNode<F: Float> {
    pub locus: LocusId,
    pub mesh: RenderMesh2D<F>,
}

impl<F: Float> ShapeNode<F> {
    pub fn new(locus: LocusId, mesh: RenderMesh2D<F>) -> Self {
        ShapeNode { locus, mesh }
    }

    /// Copy of the mesh with vertices in world space, ready to batch.
    pub fn world_mesh(&self, tree: &LocusTree<F>) -> RenderMesh2D<F> {
        let mut mesh = self.mesh.clone();
        mesh.transform(&tree.to_matrix(self.locus));
        mesh
    }
}
