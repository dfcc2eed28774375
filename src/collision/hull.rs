use std::borrow::Cow;

use super::collider::ConvexHull;
use super::projection::Projection;
use crate::math::{Transform, Vec2};
use crate::shapes::polygon::{self, Polygon};

/// World-space polygon with its separating axes computed once up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    vertices: Vec<Vec2>,
    axes: Vec<Vec2>,
}

impl Hull {
    /// Builds a hull from world-space vertices. No convexity check is made here.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let axes = polygon::edge_normals(&vertices);
        Self { vertices, axes }
    }

    /// Places a local polygon in the world.
    pub fn from_polygon(polygon: &Polygon, transform: Transform) -> Self {
        Self::new(
            polygon
                .vertices()
                .iter()
                .map(|&v| transform.apply(v))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

impl ConvexHull for Hull {
    fn axes(&self) -> Cow<'_, [Vec2]> {
        Cow::Borrowed(&self.axes)
    }

    fn project(&self, axis: Vec2) -> Projection {
        Projection::of_points(&self.vertices, axis)
    }

    fn closest_vertex(&self, point: Vec2) -> Option<Vec2> {
        let mut best: Option<(Vec2, f64)> = None;
        for &v in &self.vertices {
            let d = v.distance_squared(point);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((v, d)),
            }
        }
        best.map(|(v, _)| v)
    }
}
