use std::f64::consts::TAU;

use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Represents a convex polygon shape defined by its vertices in local space.
/// Vertices may wind either way, but must do so consistently.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Rejects fewer than 3 vertices, non-finite coordinates, zero-length or collinear
    /// edges, and outlines that are not convex.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        check_convex(&vertices)?;
        Ok(Polygon { vertices })
    }

    /// Axis-aligned rectangle centred on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ShapeError::InvalidDimensions { width, height });
        }
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    /// Regular polygon with `sides` vertices on a circle of `circumradius`, first vertex on +x.
    pub fn regular(sides: usize, circumradius: f64) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewVertices(sides));
        }
        if circumradius < 0.0 {
            return Err(ShapeError::NegativeRadius(circumradius));
        }
        let step = TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| Vec2::from_angle(step * i as f64) * circumradius)
            .collect();
        Polygon::new(vertices)
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Unit normal for each edge `v[i] -> v[i+1]`, in edge order.
    ///
    /// Normals are `perpendicular()` of the edge, so they face outward for clockwise
    /// winding and inward for counter-clockwise. SAT only needs the axis line.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        edge_normals(&self.vertices)
    }

    /// Largest distance from the local origin to any vertex: the tightest bounding
    /// radius about that origin.
    pub fn max_extent(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.magnitude())
            .fold(0.0, f64::max)
    }
}

/// Unit edge normals for a closed vertex loop.
pub(crate) fn edge_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    (0..n)
        .map(|i| (vertices[(i + 1) % n] - vertices[i]).perpendicular().normalize())
        .collect()
}

fn check_convex(vertices: &[Vec2]) -> Result<(), ShapeError> {
    let n = vertices.len();
    let mut winding = 0.0_f64;
    let mut turning = 0.0_f64;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let e1 = b - a;
        let e2 = c - b;
        let turn = e1.cross(e2);
        if turn == 0.0 {
            return Err(ShapeError::Degenerate((i + 1) % n));
        }
        if winding == 0.0 {
            winding = turn.signum();
        } else if turn.signum() != winding {
            return Err(ShapeError::NotConvex((i + 1) % n));
        }
        turning += turn.atan2(e1.dot(e2));
    }

    // Star outlines turn the same way at every vertex but wind more than once.
    if turning.abs() > TAU + 1e-6 {
        return Err(ShapeError::NotConvex(0));
    }
    Ok(())
}
