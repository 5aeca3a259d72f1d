//! Canvas objects as seen by the snapping engine.

use crate::axis::Axis;
use crate::error::{SnapError, SnapLineResult};
use crate::origin::{self, Origin};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for anything drawn on a surface.
pub type DrawableId = Uuid;

fn unit_scale() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

/// A host-owned object on the canvas.
///
/// `position` holds the stored coordinate per axis (`left`, `top`); what point
/// of the bounding box it refers to depends on `origin_x` / `origin_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: DrawableId,
    /// Stored coordinate per axis.
    pub position: Point,
    /// Unscaled extent per axis.
    pub size: Size,
    /// Scale factor per axis.
    #[serde(default = "unit_scale")]
    pub scale: Vec2,
    /// Origin mode of the horizontal coordinate.
    #[serde(default)]
    pub origin_x: Origin,
    /// Origin mode of the vertical coordinate.
    #[serde(default)]
    pub origin_y: Origin,
}

impl CanvasObject {
    /// Create an unscaled object whose position is its top-left corner.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            scale: unit_scale(),
            origin_x: Origin::Start,
            origin_y: Origin::Start,
        }
    }

    /// Set the origin mode for both axes.
    pub fn with_origin(mut self, origin_x: Origin, origin_y: Origin) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Set the scale factor for both axes.
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    /// Stored coordinate along `axis`.
    pub fn position_on(&self, axis: Axis) -> f64 {
        (axis.fields().position)(self)
    }

    /// Overwrite the stored coordinate along `axis`.
    pub fn set_position_on(&mut self, axis: Axis, value: f64) {
        (axis.fields().set_position)(self, value);
    }

    pub fn origin_on(&self, axis: Axis) -> Origin {
        (axis.fields().origin)(self)
    }

    /// Geometric center along `axis`.
    pub fn center(&self, axis: Axis) -> f64 {
        origin::center_of(self, axis)
    }

    /// Geometric center of the bounding box.
    pub fn center_point(&self) -> Point {
        Point::new(self.center(Axis::Horizontal), self.center(Axis::Vertical))
    }

    /// Stored coordinate that would put the center along `axis` at `center`.
    pub fn leading_for(&self, axis: Axis, center: f64) -> f64 {
        origin::leading_for(self, axis, center)
    }

    /// Check that every field the snapping math reads is usable.
    pub fn validate(&self) -> SnapLineResult<()> {
        for axis in Axis::ALL {
            let fields = axis.fields();
            let checks = [
                (fields.position_name, (fields.position)(self), false),
                (fields.extent_name, (fields.extent)(self), true),
                (fields.scale_name, (fields.scale)(self), false),
            ];
            for (field, value, non_negative) in checks {
                if !value.is_finite() || (non_negative && value < 0.0) {
                    return Err(SnapError::InvalidGeometry {
                        id: self.id,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
