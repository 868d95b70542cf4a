//! Pressable button: a backing box, a textured foreground and pointer tracking.
//!
//! Pointer positions are given in world space and mapped into the button's
//! local space through the inverse of its locus transform, so hit testing
//! follows any rotation or scale on the locus chain.

use crate::float::Float;
use crate::locus::{Locus2D, LocusId, LocusTree};
use crate::mesh::{RenderMesh2D, Rgba8};
use crate::rect::Rect;
use crate::vec::Vec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// A held pointer entered the hit area (or went down inside it).
    HoverStart,
    /// A held pointer left the hit area.
    HoverEnd,
    /// The pointer was released inside the hit area.
    Pressed,
    /// The pointer was released outside after going down inside.
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimpleButton<F: Float> {
    locus: LocusId,
    background_bounds: Rect<F>,
    foreground_bounds: Rect<F>,
    hit_bounds: Rect<F>,
    pub backing_color: Rgba8,
    pub foreground_color: Rgba8,
    hovering: bool,
    tracking: bool,
}

impl<F: Float> SimpleButton<F> {
    /// Button filling `bounds`, with a foreground of `foreground_size` (e.g. a
    /// texture's size) centered inside and shrunk to fit if needed. Adds its
    /// own locus to `tree`, pivoting on the center of `bounds`.
    pub fn new(tree: &mut LocusTree<F>, foreground_size: Vec2<F>, bounds: Rect<F>) -> Self {
        let locus = tree.insert(Locus2D::new().with_registration_point(bounds.center()));
        SimpleButton {
            locus,
            background_bounds: bounds,
            foreground_bounds: Rect::from_size(foreground_size).centered_fit(&bounds, false),
            hit_bounds: bounds,
            backing_color: Rgba8::BLACK,
            foreground_color: Rgba8::WHITE,
            hovering: false,
            tracking: false,
        }
    }

    /// Button sized around a label the host has already rendered at
    /// `label_size` with a font of `font_size` points.
    pub fn for_label(tree: &mut LocusTree<F>, label_size: Vec2<F>, font_size: F) -> Self {
        let bounds = Rect::new(
            F::zero(),
            F::zero(),
            label_size.x + font_size * F::half(),
            label_size.y + font_size * F::from_f32(0.375),
        );
        Self::new(tree, label_size, bounds)
    }

    pub fn locus(&self) -> LocusId { self.locus }
    pub fn background_bounds(&self) -> Rect<F> { self.background_bounds }
    pub fn foreground_bounds(&self) -> Rect<F> { self.foreground_bounds }
    pub fn hit_bounds(&self) -> Rect<F> { self.hit_bounds }
    pub fn is_hovering(&self) -> bool { self.hovering }

    /// Hit area = background grown by the given padding on each side.
    pub fn set_hit_padding(&mut self, horizontal: F, vertical: F) {
        self.hit_bounds = self.background_bounds.inflate(horizontal, vertical);
    }

    /// Whether world-space `point` falls in the hit area.
    pub fn contains(&self, tree: &LocusTree<F>, point: Vec2<F>) -> bool {
        match tree.to_matrix(self.locus).inverse() {
            Some(inv) => self.hit_bounds.contains(inv.transform_point(point)),
            None => false,
        }
    }

    pub fn pointer_down(&mut self, tree: &LocusTree<F>, point: Vec2<F>) -> Option<ButtonEvent> {
        if !self.contains(tree, point) {
            return None;
        }
        self.tracking = true;
        self.hover_start()
    }

    pub fn pointer_moved(&mut self, tree: &LocusTree<F>, point: Vec2<F>) -> Option<ButtonEvent> {
        if !self.tracking {
            return None;
        }
        if self.contains(tree, point) {
            self.hover_start()
        } else {
            self.hover_end()
        }
    }

    pub fn pointer_up(&mut self, tree: &LocusTree<F>, point: Vec2<F>) -> Option<ButtonEvent> {
        if !self.tracking {
            return None;
        }
        self.tracking = false;
        self.hover_end();
        if self.contains(tree, point) {
            log::debug!("button on locus {} pressed", self.locus.index());
            Some(ButtonEvent::Pressed)
        } else {
            Some(ButtonEvent::Cancelled)
        }
    }

    fn hover_start(&mut self) -> Option<ButtonEvent> {
        if self.hovering {
            return None;
        }
        self.hovering = true;
        self.backing_color = Rgba8::gray(0.5);
        Some(ButtonEvent::HoverStart)
    }

    fn hover_end(&mut self) -> Option<ButtonEvent> {
        if !self.hovering {
            return None;
        }
        self.hovering = false;
        self.backing_color = Rgba8::BLACK;
        Some(ButtonEvent::HoverEnd)
    }

    /// Background then foreground quad, in world space. The foreground
    /// carries full-texture coordinates for the host to bind its texture.
    pub fn meshes(&self, tree: &LocusTree<F>) -> [RenderMesh2D<F>; 2] {
        let mat = tree.to_matrix(self.locus);

        let mut background = RenderMesh2D::new(4);
        background.set_as_box(&self.background_bounds);
        background.set_color(self.backing_color);
        background.transform(&mat);

        let mut foreground = RenderMesh2D::new(4);
        foreground.set_as_box(&self.foreground_bounds);
        foreground.set_tex_coords(&Rect::new(F::zero(), F::zero(), F::one(), F::one()));
        foreground.set_color(self.foreground_color);
        foreground.transform(&mat);

        [background, foreground]
    }
}
