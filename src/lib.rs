//! Narrow-phase collision detection for 2D circles and convex polygons.
//!
//! [`check`] runs a bounding-circle rejection followed by a Separating Axis Theorem
//! test and, for intersecting pairs, reports the minimum translation vector. The crate
//! is stateless: bodies are immutable values and every query is a pure function of
//! its arguments. Resolving the contact is left to the caller.
//!
//! ```
//! use sat2d::{check, Body, Vec2};
//!
//! let a = Body::circle(Vec2::new(0.0, 0.0), 5.0).unwrap();
//! let b = Body::circle(Vec2::new(8.0, 0.0), 5.0).unwrap();
//! let hit = check(&a, &b).unwrap();
//! assert_eq!(hit.overlap, 2.0);
//! assert_eq!(hit.axis, Vec2::new(-1.0, 0.0));
//! ```

pub mod collision;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{check, check_all, Collider, ColliderKind, CollisionResult, ConvexHull, Projection};
pub use error::{Error, ShapeError};
pub use math::{Transform, Vec2};
pub use objects::{load_bodies, Body, BodyDesc};
pub use shapes::{Circle, Polygon, Shape};
