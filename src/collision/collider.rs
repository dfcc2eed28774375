//! Capabilities the collision kernel needs from a body.
//!
//! The kernel never names a concrete body type. Anything that can report a position,
//! a broad-phase radius and one of the two narrow-phase kinds can be tested.

use std::borrow::Cow;

use super::projection::Projection;
use crate::math::vec2::Vec2;

/// Narrow-phase view of a convex polygon in world space.
pub trait ConvexHull {
    /// Candidate separating axes, one unit normal per edge, in edge order.
    fn axes(&self) -> Cow<'_, [Vec2]>;

    /// Extent of the hull along `axis`.
    fn project(&self, axis: Vec2) -> Projection;

    /// Vertex nearest to `point`, first one wins on ties. `None` for an empty hull.
    fn closest_vertex(&self, point: Vec2) -> Option<Vec2>;
}

/// Which narrow-phase routine applies to a body.
#[derive(Clone, Copy)]
pub enum ColliderKind<'a> {
    /// Exact circle; `radius` may differ from the broad-phase radius.
    Circle { radius: f64 },
    Polygon(&'a dyn ConvexHull),
}

pub trait Collider {
    /// Reference point for the broad phase, and the circle centre for circles.
    fn position(&self) -> Vec2;

    /// Broad-phase radius about `position`. Must enclose the shape, or the broad phase
    /// can reject pairs that really touch.
    fn bounding_radius(&self) -> f64;

    fn kind(&self) -> ColliderKind<'_>;
}

impl<T: Collider + ?Sized> Collider for &T {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn bounding_radius(&self) -> f64 {
        (**self).bounding_radius()
    }

    fn kind(&self) -> ColliderKind<'_> {
        (**self).kind()
    }
}
