use super::vec2::Vec2;

/// Places local-space geometry in the world: rotate about the local origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec2,
    /// Angle in radians, counter-clockwise.
    pub rotation: f64,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Pure translation.
    pub fn at(position: Vec2) -> Self {
        Self::new(position, 0.0)
    }

    /// Same rotation, different position.
    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    /// Same position, different rotation.
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// Maps a local point to world space.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    pub fn is_finite(self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}
