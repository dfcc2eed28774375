use crate::error::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { radius })
    }
}
