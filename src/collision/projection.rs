use crate::math::vec2::Vec2;

/// A shape's 1-D extent `[min, max]` along some axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Interval that overlaps nothing. Folding points into it yields their extent.
    pub const EMPTY: Projection = Projection {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of a point set along `axis`.
    pub fn of_points<'a, I>(points: I, axis: Vec2) -> Self
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        points.into_iter().fold(Self::EMPTY, |p, v| {
            let d = v.dot(axis);
            Projection::new(p.min.min(d), p.max.max(d))
        })
    }

    /// Extent of a circle along `axis`.
    pub fn of_circle(center: Vec2, radius: f64, axis: Vec2) -> Self {
        let d = center.dot(axis);
        Projection::new(d - radius, d + radius)
    }

    /// Touching intervals count as overlapping.
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.min > other.max || other.min > self.max)
    }

    /// Length of the shared interval. Only meaningful when `overlaps` holds.
    pub fn overlap(&self, other: &Projection) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}
