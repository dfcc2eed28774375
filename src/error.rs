use thiserror::Error;

/// Rejections raised while constructing shapes. Collision queries themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius must be non-negative, got {0}")]
    NegativeRadius(f64),
    #[error("shape contains a non-finite value")]
    NonFinite,
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon has a zero-length or collinear edge at vertex {0}")]
    Degenerate(usize),
    #[error("polygon is not convex (winding flips at vertex {0})")]
    NotConvex(usize),
    #[error("invalid dimensions {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// Top-level error for building bodies from descriptions.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("invalid body description: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
