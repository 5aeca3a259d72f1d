//! Guide line drawables.

use crate::axis::Axis;
use crate::object::DrawableId;
use crate::origin::Origin;
use crate::settings::{AxisSettings, Rgba};
use kurbo::{Line, Point};
use uuid::Uuid;

/// Half the length of a guide line, in canvas units.
pub const GUIDE_HALF_LENGTH: f64 = 1000.0;

/// Color state of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideTint {
    /// Freshly created, never shown an alignment.
    #[default]
    Idle,
    /// Showing an alignment.
    Active,
}

/// A straight guide line marking the center coordinate of one axis.
///
/// A guide for [`Axis::Horizontal`] is a vertical line at some `x`; a guide for
/// [`Axis::Vertical`] is a horizontal line at some `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    id: DrawableId,
    axis: Axis,
    line: Line,
    visible: bool,
    tint: GuideTint,
    settings: AxisSettings,
}

impl GuideLine {
    /// Create an invisible, idle guide at coordinate 0.
    pub fn new(axis: Axis, settings: &AxisSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            axis,
            line: Self::line_at(axis, 0.0),
            visible: false,
            tint: GuideTint::Idle,
            settings: settings.clone(),
        }
    }

    fn line_at(axis: Axis, coordinate: f64) -> Line {
        match axis {
            Axis::Horizontal => Line::new(
                Point::new(coordinate, -GUIDE_HALF_LENGTH),
                Point::new(coordinate, GUIDE_HALF_LENGTH),
            ),
            Axis::Vertical => Line::new(
                Point::new(-GUIDE_HALF_LENGTH, coordinate),
                Point::new(GUIDE_HALF_LENGTH, coordinate),
            ),
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    /// The axis whose center alignment this guide marks.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Endpoints in canvas coordinates.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Position of the guide along its axis.
    pub fn coordinate(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.line.p0.x,
            Axis::Vertical => self.line.p0.y,
        }
    }

    /// Move the guide to `coordinate`. Returns false if it was already there.
    pub fn set_coordinate(&mut self, coordinate: f64) -> bool {
        if coordinate == self.coordinate() {
            return false;
        }
        self.line = Self::line_at(self.axis, coordinate);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn tint(&self) -> GuideTint {
        self.tint
    }

    pub fn set_tint(&mut self, tint: GuideTint) {
        self.tint = tint;
    }

    pub fn fill(&self) -> Rgba {
        match self.tint {
            GuideTint::Idle => self.settings.fill(),
            GuideTint::Active => self.settings.active_color(),
        }
    }

    pub fn stroke(&self) -> Rgba {
        match self.tint {
            GuideTint::Idle => self.settings.stroke(),
            GuideTint::Active => self.settings.active_color(),
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.settings.stroke_width()
    }

    pub fn selectable(&self) -> bool {
        self.settings.selectable()
    }

    pub fn evented(&self) -> bool {
        self.settings.evented()
    }

    pub fn origin(&self, axis: Axis) -> Origin {
        self.settings.origin(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guide_is_hidden_and_idle() {
        let guide = GuideLine::new(Axis::Horizontal, &AxisSettings::default());
        assert!(!guide.is_visible());
        assert_eq!(guide.tint(), GuideTint::Idle);
        assert_eq!(guide.stroke(), Rgba::RED);
        assert_eq!(guide.coordinate(), 0.0);
        assert!(!guide.selectable());
        assert!(!guide.evented());
    }

    #[test]
    fn test_guide_copies_origin_settings() {
        let settings = AxisSettings::from_json(r#"{ "originX": "left" }"#).unwrap();
        let guide = GuideLine::new(Axis::Vertical, &settings);
        assert_eq!(guide.origin(Axis::Horizontal), Origin::Start);
        assert_eq!(guide.origin(Axis::Vertical), Origin::Center);
    }

    #[test]
    fn test_horizontal_axis_guide_is_a_vertical_line() {
        let mut guide = GuideLine::new(Axis::Horizontal, &AxisSettings::default());
        assert!(guide.set_coordinate(118.0));
        let line = guide.line();
        assert_eq!(line.p0, Point::new(118.0, -GUIDE_HALF_LENGTH));
        assert_eq!(line.p1, Point::new(118.0, GUIDE_HALF_LENGTH));
    }

    #[test]
    fn test_vertical_axis_guide_is_a_horizontal_line() {
        let mut guide = GuideLine::new(Axis::Vertical, &AxisSettings::default());
        guide.set_coordinate(-42.5);
        let line = guide.line();
        assert_eq!(line.p0, Point::new(-GUIDE_HALF_LENGTH, -42.5));
        assert_eq!(line.p1, Point::new(GUIDE_HALF_LENGTH, -42.5));
        assert_eq!(guide.coordinate(), -42.5);
    }

    #[test]
    fn test_set_coordinate_reports_unchanged() {
        let mut guide = GuideLine::new(Axis::Vertical, &AxisSettings::default());
        assert!(guide.set_coordinate(10.0));
        assert!(!guide.set_coordinate(10.0));
    }

    #[test]
    fn test_active_tint_uses_active_color() {
        let mut guide = GuideLine::new(Axis::Vertical, &AxisSettings::default());
        guide.set_tint(GuideTint::Active);
        assert_eq!(guide.fill(), Rgba::GREEN);
        assert_eq!(guide.stroke(), Rgba::GREEN);
    }
}
