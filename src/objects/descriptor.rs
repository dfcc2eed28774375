//! Serializable body descriptions.
//!
//! Scenes are plain JSON arrays of tagged objects:
//!
//! ```json
//! [
//!   { "type": "box", "x": 0, "y": 0, "w": 2, "h": 2, "angle": 0.3 },
//!   { "type": "circle", "x": 8, "y": 0, "r": 5 },
//!   { "type": "poly", "x": 1, "y": 1, "vertices": [{"x":0,"y":0},{"x":1,"y":0},{"x":0,"y":1}] }
//! ]
//! ```
//!
//! Fields this crate has no use for (`mass`, `restitution`, `color`, ...) are ignored.

use log::debug;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::error::Result;
use crate::math::{Transform, Vec2};
use crate::shapes::{Circle, Polygon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BodyDesc {
    /// Rectangle centred on `(x, y)`.
    Box {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default)]
        angle: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bounding_radius: Option<f64>,
    },
    Circle {
        x: f64,
        y: f64,
        r: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bounding_radius: Option<f64>,
    },
    /// Convex polygon; `vertices` are local to `(x, y)`.
    Poly {
        x: f64,
        y: f64,
        vertices: Vec<Vec2>,
        #[serde(default)]
        angle: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bounding_radius: Option<f64>,
    },
}

impl BodyDesc {
    /// Validates the description and places the body.
    pub fn build(&self) -> Result<Body> {
        let (body, bounding_radius) = match self {
            BodyDesc::Box {
                x,
                y,
                w,
                h,
                angle,
                bounding_radius,
            } => (
                Body::new(Polygon::rectangle(*w, *h)?, Transform::new(Vec2::new(*x, *y), *angle))?,
                *bounding_radius,
            ),
            BodyDesc::Circle {
                x,
                y,
                r,
                bounding_radius,
            } => (
                Body::new(Circle::new(*r)?, Transform::at(Vec2::new(*x, *y)))?,
                *bounding_radius,
            ),
            BodyDesc::Poly {
                x,
                y,
                vertices,
                angle,
                bounding_radius,
            } => (
                Body::new(
                    Polygon::new(vertices.clone())?,
                    Transform::new(Vec2::new(*x, *y), *angle),
                )?,
                *bounding_radius,
            ),
        };

        Ok(match bounding_radius {
            Some(radius) => body.with_bounding_radius(radius)?,
            None => body,
        })
    }
}

/// Parses a JSON array of body descriptions and builds every body.
/// Fails on the first invalid entry.
pub fn load_bodies(json: &str) -> Result<Vec<Body>> {
    let descs: Vec<BodyDesc> = serde_json::from_str(json)?;
    let bodies = descs.iter().map(BodyDesc::build).collect::<Result<Vec<_>>>()?;
    debug!("loaded {} bodies", bodies.len());
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ShapeError};
    use crate::shapes::Shape;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_load_mixed_scene() {
        let json = r##"[
            { "type": "box", "x": 0, "y": 0, "w": 2, "h": 2, "mass": 3, "color": "#ff9f0a" },
            { "type": "circle", "x": 8, "y": 0, "r": 5, "restitution": 0.6 },
            { "type": "poly", "x": 1, "y": 1, "angle": 0.5,
              "vertices": [{"x":0,"y":0},{"x":1,"y":0},{"x":0,"y":1}] }
        ]"##;
        let bodies = load_bodies(json).unwrap();
        assert_eq!(bodies.len(), 3);

        assert!(matches!(bodies[0].shape(), Shape::Polygon(_)));
        assert!((bodies[0].bounding_radius() - 2.0_f64.sqrt()).abs() < EPSILON);

        assert_eq!(bodies[1].position(), Vec2::new(8.0, 0.0));
        assert_eq!(bodies[1].bounding_radius(), 5.0);

        assert_eq!(bodies[2].rotation(), 0.5);
        assert_eq!(bodies[2].hull().unwrap().vertices().len(), 3);
    }

    #[test]
    fn test_bounding_radius_override() {
        let desc: BodyDesc =
            serde_json::from_str(r#"{ "type": "circle", "x": 0, "y": 0, "r": 1, "bounding_radius": 3 }"#).unwrap();
        assert_eq!(desc.build().unwrap().bounding_radius(), 3.0);
    }

    #[test]
    fn test_invalid_shape_is_reported() {
        let err = load_bodies(r#"[{ "type": "circle", "x": 0, "y": 0, "r": -2 }]"#).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NegativeRadius(_))));

        let err = load_bodies(r#"[{ "type": "box", "x": 0, "y": 0, "w": 0, "h": 2 }]"#).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_bad_bounding_radius_is_reported() {
        let err = load_bodies(r#"[{ "type": "circle", "x": 0, "y": 0, "r": 1, "bounding_radius": -1 }]"#)
            .unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NegativeRadius(_))));
    }

    #[test]
    fn test_unknown_type_is_json_error() {
        let err = load_bodies(r#"[{ "type": "capsule", "x": 0, "y": 0 }]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_desc_serializes_with_tag() {
        let desc = BodyDesc::Circle {
            x: 1.0,
            y: 2.0,
            r: 3.0,
            bounding_radius: None,
        };
        let value = serde_json::to_value(&desc).unwrap();
        assert_eq!(value["type"], "circle");
        assert!(value.get("bounding_radius").is_none());
    }
}
