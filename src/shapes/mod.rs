pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// Local-space geometry of a collidable body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Smallest radius about the local origin that encloses the shape.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Polygon(polygon) => polygon.max_extent(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
