//! Vertex lists for 2D shapes, laid out as triangle strips.

use crate::error::MeshError;
use crate::float::Float;
use crate::matrix::Affine2;
use crate::rect::Rect;
use crate::vec::Vec2;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }

    /// Opaque gray; `level` in [0, 1], clamped.
    pub fn gray(level: f32) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Rgba8::new(v, v, v, 255)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Rgba8::WHITE
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<F: Float> {
    pub position: Vec2<F>,
    pub color: Rgba8,
    pub tex_coord: Vec2<F>,
}

impl<F: Float> Vertex<F> {
    pub fn at(position: Vec2<F>) -> Self {
        Vertex { position, ..Default::default() }
    }
}

/// Upper bound on circle segments, explicit or derived from the radius.
pub const MAX_CIRCLE_SEGMENTS: usize = 4096;

/// Vertices in triangle-strip order. The `set_as_*` methods resize the
/// vertex list as needed and overwrite positions only, so colors and texture
/// coordinates survive reshaping to the same vertex count.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderMesh2D<F: Float> {
    pub vertices: AllocVec<Vertex<F>>,
}

impl<F: Float> RenderMesh2D<F> {
    pub fn new(vertex_count: usize) -> Self {
        RenderMesh2D { vertices: vec![Vertex::default(); vertex_count] }
    }

    fn resize(&mut self, count: usize) {
        if self.vertices.len() != count {
            self.vertices = vec![Vertex::default(); count];
        }
    }

    /// Ellipse or arc centered on the origin, alternating center and rim
    /// vertices. With fewer than 2 `segments` a count is derived from the
    /// radius and sweep, capped at [`MAX_CIRCLE_SEGMENTS`].
    pub fn set_as_circle(
        &mut self,
        radius: Vec2<F>,
        start_radians: F,
        end_radians: F,
        segments: usize,
    ) -> Result<(), MeshError> {
        if !radius.is_finite() {
            return Err(MeshError::NonFiniteRadius);
        }
        if segments > MAX_CIRCLE_SEGMENTS {
            return Err(MeshError::TooManySegments { segments, max: MAX_CIRCLE_SEGMENTS });
        }
        let mut segments = segments;
        if segments < 2 {
            let sweep = (end_radians - start_radians).abs();
            segments = (radius.max_element() * sweep / F::from_f32(3.0))
                .floor()
                .to_usize()
                .min(MAX_CIRCLE_SEGMENTS);
        }
        let segments = segments.max(2);
        self.resize(segments * 2 + 2);

        for s in 0..=segments {
            let t = F::from_usize(s) / F::from_usize(segments);
            let angle = start_radians.lerp(end_radians, t);
            self.vertices[s * 2].position = Vec2::zero();
            self.vertices[s * 2 + 1].position = Vec2::new(radius.x * angle.cos(), radius.y * angle.sin());
        }
        Ok(())
    }

    /// Full ellipse with derived segment count.
    pub fn set_as_full_circle(&mut self, radius: Vec2<F>) -> Result<(), MeshError> {
        self.set_as_circle(radius, F::zero(), F::tau(), 0)
    }

    /// Four vertices: upper right, upper left, lower right, lower left.
    pub fn set_as_box(&mut self, bounds: &Rect<F>) {
        self.resize(4);
        self.vertices[0].position = bounds.upper_right();
        self.vertices[1].position = bounds.upper_left();
        self.vertices[2].position = bounds.lower_right();
        self.vertices[3].position = bounds.lower_left();
    }

    /// Texture coordinates for a mesh shaped by [`set_as_box`](Self::set_as_box).
    pub fn set_tex_coords(&mut self, uv: &Rect<F>) {
        let corners = [uv.upper_right(), uv.upper_left(), uv.lower_right(), uv.lower_left()];
        for (vertex, corner) in self.vertices.iter_mut().zip(corners) {
            vertex.tex_coord = corner;
        }
    }

    /// Strip following `skeleton`, offset `width` to either side along the
    /// averaged normal at each point. A `closed` ribbon bends its last pair
    /// toward the second point, for skeletons whose last point repeats the first.
    pub fn set_as_ribbon(&mut self, skeleton: &[Vec2<F>], width: F, closed: bool) -> Result<(), MeshError> {
        let n = skeleton.len();
        if n < 2 {
            return Err(MeshError::SkeletonTooShort { len: n });
        }
        self.resize(n * 2);

        let mut place = |i: usize, point: Vec2<F>, edge: Vec2<F>| {
            let north = edge.perp().normalize() * width;
            self.vertices[i * 2].position = point + north;
            self.vertices[i * 2 + 1].position = point - north;
        };

        place(0, skeleton[0], skeleton[1] - skeleton[0]);
        for i in 1..n - 1 {
            let (a, b, c) = (skeleton[i - 1], skeleton[i], skeleton[i + 1]);
            let edge = ((b - a).normalize() + (c - b).normalize()) * F::half();
            place(i, b, edge);
        }
        let last = skeleton[n - 1];
        let edge = if closed { skeleton[1] - last } else { last - skeleton[n - 2] };
        place(n - 1, last, edge);
        Ok(())
    }

    /// Quad from `a` to `b`, `width` wide.
    pub fn set_as_line(&mut self, a: Vec2<F>, b: Vec2<F>, width: F) {
        let north = (b - a).normalize().perp() * (width * F::half());
        self.resize(4);
        self.vertices[0].position = a + north;
        self.vertices[1].position = a - north;
        self.vertices[2].position = b + north;
        self.vertices[3].position = b - north;
    }

    /// Like [`set_as_line`](Self::set_as_line) with both ends pushed out by half the width.
    pub fn set_as_capped_line(&mut self, a: Vec2<F>, b: Vec2<F>, width: F) {
        let cap = (b - a).normalize() * (width * F::half());
        self.set_as_line(a - cap, b + cap, width);
    }

    pub fn set_as_triangle(&mut self, a: Vec2<F>, b: Vec2<F>, c: Vec2<F>) {
        self.resize(3);
        self.vertices[0].position = a;
        self.vertices[1].position = b;
        self.vertices[2].position = c;
    }

    pub fn transform(&mut self, mat: &Affine2<F>) {
        for vertex in self.vertices.iter_mut() {
            vertex.position = mat.transform_point(vertex.position);
        }
    }

    /// Color every vertex. Call after shaping, since resizing resets colors.
    pub fn set_color(&mut self, color: Rgba8) {
        for vertex in self.vertices.iter_mut() {
            vertex.color = color;
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<F: Float> Default for RenderMesh2D<F> {
    fn default() -> Self {
        Self::new(3)
    }
}
