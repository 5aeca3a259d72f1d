//! Canvas axes and the per-axis field lookup table.

use crate::object::CanvasObject;
use crate::origin::Origin;
use serde::{Deserialize, Serialize};

/// A coordinate axis of the canvas.
///
/// `Horizontal` is the x axis (`left`, `width`, `scaleX`, `originX`),
/// `Vertical` is the y axis (`top`, `height`, `scaleY`, `originY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes, in the order snapping evaluates them.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Stable index of this axis (0 for horizontal, 1 for vertical).
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }

    /// Field accessors for this axis.
    pub(crate) fn fields(self) -> &'static AxisFields {
        match self {
            Axis::Horizontal => &HORIZONTAL_FIELDS,
            Axis::Vertical => &VERTICAL_FIELDS,
        }
    }
}

/// Accessors for the fields of a [`CanvasObject`] that belong to one axis.
pub(crate) struct AxisFields {
    pub position: fn(&CanvasObject) -> f64,
    pub set_position: fn(&mut CanvasObject, f64),
    pub extent: fn(&CanvasObject) -> f64,
    pub scale: fn(&CanvasObject) -> f64,
    pub origin: fn(&CanvasObject) -> Origin,
    /// Host-facing field names, used in error reports.
    pub position_name: &'static str,
    pub extent_name: &'static str,
    pub scale_name: &'static str,
}

static HORIZONTAL_FIELDS: AxisFields = AxisFields {
    position: |obj| obj.position.x,
    set_position: |obj, value| obj.position.x = value,
    extent: |obj| obj.size.width,
    scale: |obj| obj.scale.x,
    origin: |obj| obj.origin_x,
    position_name: "left",
    extent_name: "width",
    scale_name: "scaleX",
};

static VERTICAL_FIELDS: AxisFields = AxisFields {
    position: |obj| obj.position.y,
    set_position: |obj, value| obj.position.y = value,
    extent: |obj| obj.size.height,
    scale: |obj| obj.scale.y,
    origin: |obj| obj.origin_y,
    position_name: "top",
    extent_name: "height",
    scale_name: "scaleY",
};
