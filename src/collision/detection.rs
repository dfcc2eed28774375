use log::trace;

use super::collider::{Collider, ColliderKind, ConvexHull};
use super::contact::{CollisionResult, PairContact, Penetration};
use super::projection::Projection;
use crate::math::vec2::Vec2;

/// Tests two bodies for intersection.
///
/// A bounding-circle test rejects far pairs first, then the exact routine for the pair
/// of kinds runs. On a hit the result's axis points from `b` toward `a`.
pub fn check<'a, A, B>(a: &'a A, b: &'a B) -> Option<CollisionResult<'a, A, B>>
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let pos_a = a.position();
    let pos_b = b.position();

    let reach = a.bounding_radius() + b.bounding_radius();
    // written so a NaN distance or reach is rejected too
    if !(pos_a.distance(pos_b) <= reach) {
        trace!("broad phase rejected pair, reach {reach}");
        return None;
    }

    let penetration = match (a.kind(), b.kind()) {
        (ColliderKind::Circle { radius: ra }, ColliderKind::Circle { radius: rb }) => {
            check_circle_circle(pos_a, ra, pos_b, rb)?
        }
        (ColliderKind::Polygon(hull_a), ColliderKind::Polygon(hull_b)) => {
            check_polygon_polygon(hull_a, pos_a, hull_b, pos_b)?
        }
        (ColliderKind::Polygon(hull), ColliderKind::Circle { radius }) => {
            check_polygon_circle(hull, pos_a, pos_b, radius)?
        }
        (ColliderKind::Circle { radius }, ColliderKind::Polygon(hull)) => {
            check_polygon_circle(hull, pos_b, pos_a, radius)?.reversed()
        }
    };

    Some(CollisionResult::new(penetration, a, b))
}

/// Runs `check` over every unordered pair `i < j`, in index order.
pub fn check_all<B: Collider>(bodies: &[B]) -> Vec<PairContact<'_, B>> {
    let mut contacts = Vec::new();
    for (i, body_a) in bodies.iter().enumerate() {
        for (j, body_b) in bodies.iter().enumerate().skip(i + 1) {
            if let Some(result) = check(body_a, body_b) {
                contacts.push(PairContact {
                    index_a: i,
                    index_b: j,
                    result,
                });
            }
        }
    }
    contacts
}

/// Exact circle test. Touching circles do not collide.
///
/// The axis is `normalize(center_a - center_b)`; concentric circles get the zero axis.
pub fn check_circle_circle(
    center_a: Vec2,
    radius_a: f64,
    center_b: Vec2,
    radius_b: f64,
) -> Option<Penetration> {
    let distance = center_a.distance(center_b);
    let radii_sum = radius_a + radius_b;
    if distance >= radii_sum {
        return None;
    }

    let axis = (center_a - center_b).normalize();
    if axis == Vec2::ZERO {
        trace!("concentric circles, no defined separation axis");
    }
    Some(Penetration {
        overlap: radii_sum - distance,
        axis,
    })
}

/// Full SAT between two convex hulls, testing `hull_a`'s axes and then `hull_b`'s.
/// The axis is oriented from `position_b` toward `position_a`.
pub fn check_polygon_polygon(
    hull_a: &dyn ConvexHull,
    position_a: Vec2,
    hull_b: &dyn ConvexHull,
    position_b: Vec2,
) -> Option<Penetration> {
    let axes_a = hull_a.axes();
    let axes_b = hull_b.axes();
    let axes = axes_a.iter().chain(axes_b.iter()).copied();

    let penetration = min_overlap(axes, |axis| hull_a.project(axis), |axis| hull_b.project(axis))?;
    Some(orient(penetration, position_a, position_b))
}

/// SAT between a convex hull and a circle.
///
/// Besides the hull's edge normals, the axis from the circle centre to the nearest hull
/// vertex is tested: it is the only direction that can separate the circle from a
/// corner. When the circle centre sits exactly on a vertex that axis has zero length
/// and is left out, so only the edge normals are tested. The axis is oriented from the
/// circle toward the polygon.
pub fn check_polygon_circle(
    hull: &dyn ConvexHull,
    position: Vec2,
    center: Vec2,
    radius: f64,
) -> Option<Penetration> {
    let corner_axis = hull
        .closest_vertex(center)
        .map(|vertex| (vertex - center).normalize())
        .filter(|axis| *axis != Vec2::ZERO);

    let edge_axes = hull.axes();
    let axes = edge_axes.iter().copied().chain(corner_axis);

    let penetration = min_overlap(
        axes,
        |axis| hull.project(axis),
        |axis| Projection::of_circle(center, radius, axis),
    )?;
    Some(orient(penetration, position, center))
}

/// Smallest overlap over `axes`, or `None` as soon as one axis separates the shapes.
/// Ties keep the earliest axis. No axes at all also yields `None`.
fn min_overlap<I, PA, PB>(axes: I, project_a: PA, project_b: PB) -> Option<Penetration>
where
    I: IntoIterator<Item = Vec2>,
    PA: Fn(Vec2) -> Projection,
    PB: Fn(Vec2) -> Projection,
{
    let mut best: Option<Penetration> = None;

    for axis in axes {
        let pa = project_a(axis);
        let pb = project_b(axis);

        if !pa.overlaps(&pb) {
            trace!("separating axis ({}, {})", axis.x, axis.y);
            return None;
        }

        let overlap = pa.overlap(&pb);
        if best.map_or(true, |b| overlap < b.overlap) {
            best = Some(Penetration { overlap, axis });
        }
    }

    best
}

/// Flips the axis so it points from `position_b` toward `position_a`.
fn orient(penetration: Penetration, position_a: Vec2, position_b: Vec2) -> Penetration {
    if penetration.axis.dot(position_a - position_b) < 0.0 {
        penetration.reversed()
    } else {
        penetration
    }
}
