use log::{debug, warn};

use crate::collision::collider::{Collider, ColliderKind};
use crate::collision::hull::Hull;
use crate::error::ShapeError;
use crate::math::{Transform, Vec2};
use crate::shapes::{Circle, Polygon, Shape};

/// A shape placed in the world.
///
/// Bodies are values: "moving" one produces a new body with its world geometry
/// recomputed, so a body handed to `check` never changes underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    shape: Shape,
    transform: Transform,
    bounding_radius: f64,
    world: WorldShape,
}

#[derive(Debug, Clone, PartialEq)]
enum WorldShape {
    Circle { radius: f64 },
    Polygon(Hull),
}

impl Body {
    /// Places `shape` with its local origin at `transform.position`.
    /// The broad-phase radius is the shape's tightest bound about that origin.
    ///
    /// Fails with [`ShapeError::NonFinite`] if the position or angle is not finite.
    pub fn new(shape: impl Into<Shape>, transform: Transform) -> Result<Self, ShapeError> {
        let shape = shape.into();
        let bounding_radius = shape.bounding_radius();
        let world = world_shape(&shape, transform)?;
        Ok(Self {
            shape,
            transform,
            bounding_radius,
            world,
        })
    }

    pub fn circle(position: Vec2, radius: f64) -> Result<Self, ShapeError> {
        Self::new(Circle::new(radius)?, Transform::at(position))
    }

    pub fn polygon(polygon: Polygon, position: Vec2, angle: f64) -> Result<Self, ShapeError> {
        Self::new(polygon, Transform::new(position, angle))
    }

    /// Box centred on `position`, rotated by `angle` radians.
    pub fn rectangle(position: Vec2, width: f64, height: f64, angle: f64) -> Result<Self, ShapeError> {
        Self::polygon(Polygon::rectangle(width, height)?, position, angle)
    }

    /// Replaces the broad-phase radius.
    ///
    /// A radius smaller than the shape's true bound is honoured, but the broad phase may
    /// then discard pairs that actually intersect. Negative and non-finite radii are rejected.
    pub fn with_bounding_radius(self, radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        let tight = self.shape.bounding_radius();
        if radius < tight {
            warn!("bounding radius {radius} is smaller than the shape's extent {tight}");
        } else {
            debug!("bounding radius overridden: {tight} -> {radius}");
        }
        Ok(Self {
            bounding_radius: radius,
            ..self
        })
    }

    /// Same body at a new position.
    pub fn moved_to(&self, position: Vec2) -> Result<Self, ShapeError> {
        self.placed(self.transform.with_position(position))
    }

    /// Same body at a new orientation.
    pub fn rotated_to(&self, angle: f64) -> Result<Self, ShapeError> {
        self.placed(self.transform.with_rotation(angle))
    }

    fn placed(&self, transform: Transform) -> Result<Self, ShapeError> {
        Ok(Self {
            shape: self.shape.clone(),
            transform,
            bounding_radius: self.bounding_radius,
            world: world_shape(&self.shape, transform)?,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// World-space hull, for polygon bodies.
    pub fn hull(&self) -> Option<&Hull> {
        match &self.world {
            WorldShape::Polygon(hull) => Some(hull),
            WorldShape::Circle { .. } => None,
        }
    }
}

fn world_shape(shape: &Shape, transform: Transform) -> Result<WorldShape, ShapeError> {
    if !transform.is_finite() {
        return Err(ShapeError::NonFinite);
    }
    Ok(match shape {
        Shape::Circle(circle) => WorldShape::Circle {
            radius: circle.radius,
        },
        Shape::Polygon(polygon) => WorldShape::Polygon(Hull::from_polygon(polygon, transform)),
    })
}

impl Collider for Body {
    fn position(&self) -> Vec2 {
        self.transform.position
    }

    fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    fn kind(&self) -> ColliderKind<'_> {
        match &self.world {
            WorldShape::Circle { radius } => ColliderKind::Circle { radius: *radius },
            WorldShape::Polygon(hull) => ColliderKind::Polygon(hull),
        }
    }
}
