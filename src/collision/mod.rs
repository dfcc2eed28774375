pub mod collider;
pub mod contact;
pub mod detection;
pub mod hull;
pub mod projection;

// Re-export key types
pub use collider::{Collider, ColliderKind, ConvexHull};
pub use contact::{CollisionResult, PairContact, Penetration};
pub use detection::{check, check_all, check_circle_circle, check_polygon_circle, check_polygon_polygon};
pub use hull::Hull;
pub use projection::Projection;
