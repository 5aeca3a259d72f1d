//! Origin modes and origin-aware center math.
//!
//! A canvas object stores one coordinate per axis, and its origin mode says
//! which point of the bounding box that coordinate refers to. Snapping works on
//! geometric centers, so every comparison goes through [`center_of`] and every
//! correction through [`leading_for`], which are exact inverses of each other.

use crate::axis::Axis;
use crate::object::CanvasObject;
use serde::{Deserialize, Serialize};

/// Which point of an object's bounding box its stored coordinate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Leading edge (left or top).
    #[default]
    #[serde(alias = "left", alias = "top")]
    Start,
    /// Geometric center.
    Center,
    /// Trailing edge (right or bottom).
    #[serde(alias = "right", alias = "bottom")]
    End,
}

/// Half of the object's scaled extent along `axis`.
fn half_extent(obj: &CanvasObject, axis: Axis) -> f64 {
    let fields = axis.fields();
    (fields.extent)(obj) * (fields.scale)(obj) / 2.0
}

/// Geometric center of `obj` along `axis`.
pub fn center_of(obj: &CanvasObject, axis: Axis) -> f64 {
    let fields = axis.fields();
    let position = (fields.position)(obj);
    match (fields.origin)(obj) {
        Origin::Center => position,
        Origin::Start => position + half_extent(obj, axis),
        Origin::End => position - half_extent(obj, axis),
    }
}

/// Stored coordinate that places the center of `obj` at `desired_center`.
pub fn leading_for(obj: &CanvasObject, axis: Axis, desired_center: f64) -> f64 {
    match (axis.fields().origin)(obj) {
        Origin::Center => desired_center,
        Origin::Start => desired_center - half_extent(obj, axis),
        Origin::End => desired_center + half_extent(obj, axis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size, Vec2};

    const ORIGINS: [Origin; 3] = [Origin::Start, Origin::Center, Origin::End];

    fn object(origin: Origin) -> CanvasObject {
        CanvasObject::new(Point::new(37.25, -12.5), Size::new(51.0, 13.0))
            .with_scale(Vec2::new(1.5, 0.75))
            .with_origin(origin, origin)
    }

    #[test]
    fn test_center_origin_is_identity() {
        let obj = object(Origin::Center);
        assert_eq!(center_of(&obj, Axis::Horizontal), 37.25);
        assert_eq!(center_of(&obj, Axis::Vertical), -12.5);
    }

    #[test]
    fn test_start_origin_adds_half_extent() {
        let obj = CanvasObject::new(Point::new(108.0, 300.0), Size::new(20.0, 20.0));
        assert_eq!(center_of(&obj, Axis::Horizontal), 118.0);
        assert_eq!(center_of(&obj, Axis::Vertical), 310.0);
    }

    #[test]
    fn test_end_origin_subtracts_scaled_half_extent() {
        let obj = CanvasObject::new(Point::new(100.0, 100.0), Size::new(20.0, 40.0))
            .with_scale(Vec2::new(2.0, 0.5))
            .with_origin(Origin::End, Origin::End);
        assert_eq!(center_of(&obj, Axis::Horizontal), 80.0);
        assert_eq!(center_of(&obj, Axis::Vertical), 90.0);
    }

    #[test]
    fn test_leading_for_inverts_center_of() {
        for origin in ORIGINS {
            let obj = object(origin);
            for axis in Axis::ALL {
                let stored = (axis.fields().position)(&obj);
                let round_trip = leading_for(&obj, axis, center_of(&obj, axis));
                assert!(
                    (round_trip - stored).abs() < 1e-9,
                    "{origin:?} {axis:?}: {round_trip} != {stored}"
                );
            }
        }
    }

    #[test]
    fn test_leading_for_places_center_exactly() {
        for origin in ORIGINS {
            let mut obj = object(origin);
            obj.position.x = leading_for(&obj, Axis::Horizontal, 118.0);
            assert!((center_of(&obj, Axis::Horizontal) - 118.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_origin_accepts_host_aliases() {
        let parsed: Vec<Origin> =
            serde_json::from_str(r#"["left", "top", "center", "right", "bottom", "start", "end"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                Origin::Start,
                Origin::Start,
                Origin::Center,
                Origin::End,
                Origin::End,
                Origin::Start,
                Origin::End,
            ]
        );
    }
}
