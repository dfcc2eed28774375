use std::fmt;

use crate::math::vec2::Vec2;

/// Minimum translation along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Depth along `axis`; never negative.
    pub overlap: f64,
    pub axis: Vec2,
}

impl Penetration {
    /// Same depth, axis reversed.
    pub fn reversed(self) -> Self {
        Self {
            overlap: self.overlap,
            axis: -self.axis,
        }
    }

    /// `axis * overlap`.
    pub fn translation(self) -> Vec2 {
        self.axis * self.overlap
    }
}

/// Stores information about an intersection between two bodies.
///
/// `axis` points from `body_b` toward `body_a`, so displacing `body_a` by
/// `axis * overlap` (or `body_b` by the negation) separates the pair.
pub struct CollisionResult<'a, A: ?Sized, B: ?Sized = A> {
    /// Smallest penetration depth found across all tested axes.
    pub overlap: f64,
    /// Unit axis of minimum overlap. Zero for exactly concentric circles.
    pub axis: Vec2,
    pub body_a: &'a A,
    pub body_b: &'a B,
}

impl<'a, A: ?Sized, B: ?Sized> CollisionResult<'a, A, B> {
    pub(crate) fn new(penetration: Penetration, body_a: &'a A, body_b: &'a B) -> Self {
        Self {
            overlap: penetration.overlap,
            axis: penetration.axis,
            body_a,
            body_b,
        }
    }

    pub fn penetration(&self) -> Penetration {
        Penetration {
            overlap: self.overlap,
            axis: self.axis,
        }
    }

    /// Minimum translation vector to apply to `body_a`.
    pub fn mtv(&self) -> Vec2 {
        self.penetration().translation()
    }

    /// The same contact seen from the other body.
    pub fn swapped(self) -> CollisionResult<'a, B, A> {
        CollisionResult::new(self.penetration().reversed(), self.body_b, self.body_a)
    }
}

// Manual impls: the bodies are borrowed, so no bounds on A or B are needed.
impl<A: ?Sized, B: ?Sized> Clone for CollisionResult<'_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, B: ?Sized> Copy for CollisionResult<'_, A, B> {}

impl<A: ?Sized, B: ?Sized> fmt::Debug for CollisionResult<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionResult")
            .field("overlap", &self.overlap)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}

/// A hit from `check_all`, tagged with the indices of the two bodies (`index_a < index_b`).
pub struct PairContact<'a, B> {
    pub index_a: usize,
    pub index_b: usize,
    pub result: CollisionResult<'a, B, B>,
}

impl<B> fmt::Debug for PairContact<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairContact")
            .field("index_a", &self.index_a)
            .field("index_b", &self.index_b)
            .field("result", &self.result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped_reverses_axis_and_bodies() {
        let a = 1_u8;
        let b = 2_u16;
        let hit = CollisionResult::new(
            Penetration {
                overlap: 0.5,
                axis: Vec2::X,
            },
            &a,
            &b,
        );
        assert_eq!(hit.mtv(), Vec2::new(0.5, 0.0));

        let back = hit.swapped();
        assert_eq!(*back.body_a, 2);
        assert_eq!(*back.body_b, 1);
        assert_eq!(back.axis, -Vec2::X);
        assert_eq!(back.overlap, 0.5);
    }
}
