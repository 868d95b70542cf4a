//! Hierarchical 2D transforms.
//!
//! A [`Locus2D`] is a position, rotation, scale and registration point with an
//! optional parent. Loci live in a [`LocusTree`] and refer to their parent by
//! [`LocusId`], so a child never owns its parent and the tree keeps every
//! parent alive for as long as any child can be traversed.

use crate::error::SceneError;
use crate::float::Float;
use crate::matrix::Affine2;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Handle to a locus inside a [`LocusTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocusId(usize);

impl LocusId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Local placement of a drawable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locus2D<F: Float> {
    pub position: Vec2<F>,
    /// Radians, counter-clockwise.
    pub rotation: F,
    pub scale: Vec2<F>,
    /// Pivot for rotation and scale, in local coordinates.
    pub registration_point: Vec2<F>,
    parent: Option<LocusId>,
}

impl<F: Float> Locus2D<F> {
    pub fn new() -> Self {
        Locus2D {
            position: Vec2::zero(),
            rotation: F::zero(),
            scale: Vec2::one(),
            registration_point: Vec2::zero(),
            parent: None,
        }
    }

    pub fn at(position: Vec2<F>) -> Self {
        Locus2D { position, ..Self::new() }
    }

    pub fn with_rotation(mut self, rotation: F) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2<F>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_registration_point(mut self, registration_point: Vec2<F>) -> Self {
        self.registration_point = registration_point;
        self
    }

    pub fn parent(&self) -> Option<LocusId> {
        self.parent
    }

    /// `translate(position + registration) * rotate * scale * translate(-registration)`,
    /// ignoring any parent.
    pub fn local_matrix(&self) -> Affine2<F> {
        let mut mat = Affine2::identity();
        mat.translate(self.position + self.registration_point)
            .rotate(self.rotation)
            .scale(self.scale)
            .translate(-self.registration_point);
        mat
    }
}

impl<F: Float> Default for Locus2D<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena owning every locus of a scene.
///
/// Accessors taking a [`LocusId`] panic when handed an id from another tree,
/// the same way slice indexing does; [`LocusTree::get`] is the checked form.
#[derive(Clone, Debug, Default)]
pub struct LocusTree<F: Float> {
    loci: AllocVec<Locus2D<F>>,
}

impl<F: Float> LocusTree<F> {
    pub fn new() -> Self {
        LocusTree { loci: AllocVec::new() }
    }

    /// Add a locus. Any parent already set on `locus` is kept only if it
    /// names an existing locus.
    pub fn insert(&mut self, mut locus: Locus2D<F>) -> LocusId {
        if locus.parent.map_or(false, |p| p.0 >= self.loci.len()) {
            locus.parent = None;
        }
        let id = LocusId(self.loci.len());
        self.loci.push(locus);
        id
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn get(&self, id: LocusId) -> Option<&Locus2D<F>> {
        self.loci.get(id.0)
    }

    pub fn get_mut(&mut self, id: LocusId) -> Option<&mut Locus2D<F>> {
        self.loci.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocusId, &Locus2D<F>)> {
        self.loci.iter().enumerate().map(|(i, l)| (LocusId(i), l))
    }

    pub fn parent(&self, id: LocusId) -> Option<LocusId> {
        self.loci[id.0].parent
    }

    fn check(&self, id: LocusId) -> Result<(), SceneError> {
        if id.0 < self.loci.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownLocus { index: id.0, count: self.loci.len() })
        }
    }

    /// Attach `child` under `parent`, or make it a root with `None`.
    ///
    /// Rejects assignments that would make `child` its own ancestor.
    pub fn set_parent(&mut self, child: LocusId, parent: Option<LocusId>) -> Result<(), SceneError> {
        self.check(child)?;
        if let Some(p) = parent {
            self.check(p)?;
            let mut cursor = Some(p);
            while let Some(ancestor) = cursor {
                if ancestor == child {
                    return Err(SceneError::ParentCycle);
                }
                cursor = self.loci[ancestor.0].parent;
            }
        }
        log::debug!("locus {} parent -> {:?}", child.0, parent.map(LocusId::index));
        self.loci[child.0].parent = parent;
        Ok(())
    }

    /// Local-to-world transform: every ancestor's local matrix composed with ours.
    pub fn to_matrix(&self, id: LocusId) -> Affine2<F> {
        let locus = &self.loci[id.0];
        let mut mat = locus.local_matrix();
        let mut cursor = locus.parent;
        while let Some(p) = cursor {
            let ancestor = &self.loci[p.0];
            mat = ancestor.local_matrix() * mat;
            cursor = ancestor.parent;
        }
        mat
    }

    /// World scale: component-wise product up the chain.
    pub fn scale(&self, id: LocusId) -> Vec2<F> {
        let locus = &self.loci[id.0];
        let mut scale = locus.scale;
        let mut cursor = locus.parent;
        while let Some(p) = cursor {
            let ancestor = &self.loci[p.0];
            scale = ancestor.scale.component_mul(scale);
            cursor = ancestor.parent;
        }
        scale
    }

    /// World rotation: sum up the chain.
    pub fn rotation(&self, id: LocusId) -> F {
        let locus = &self.loci[id.0];
        let mut rotation = locus.rotation;
        let mut cursor = locus.parent;
        while let Some(p) = cursor {
            let ancestor = &self.loci[p.0];
            rotation = ancestor.rotation + rotation;
            cursor = ancestor.parent;
        }
        rotation
    }

    /// World position: `position` carried through the parent's full transform.
    pub fn position(&self, id: LocusId) -> Vec2<F> {
        let locus = &self.loci[id.0];
        match locus.parent {
            Some(p) => self.to_matrix(p).transform_point(locus.position),
            None => locus.position,
        }
    }

    /// Map a point in `id`'s local space to world space.
    pub fn transform_point(&self, id: LocusId, point: Vec2<F>) -> Vec2<F> {
        self.to_matrix(id).transform_point(point)
    }

    /// Bake the inherited scale, rotation and position into `id` and drop its
    /// parent. World [`scale`](Self::scale), [`rotation`](Self::rotation) and
    /// [`position`](Self::position) read the same before and after. Does
    /// nothing for a root.
    pub fn detach_from_parent(&mut self, id: LocusId) {
        let Some(p) = self.loci[id.0].parent else {
            return;
        };
        let parent_scale = self.scale(p);
        let parent_rotation = self.rotation(p);
        let parent_matrix = self.to_matrix(p);

        let locus = &mut self.loci[id.0];
        locus.scale = locus.scale.component_mul(parent_scale);
        locus.rotation = locus.rotation + parent_rotation;
        locus.position = parent_matrix.transform_point(locus.position);
        locus.parent = None;
        log::debug!("locus {} detached from {}", id.0, p.0);
    }
}
