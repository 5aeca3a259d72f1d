//! Guide line settings.

use crate::axis::Axis;
use crate::error::{SnapError, SnapLineResult};
use crate::origin::Origin;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable RGBA8 color.
///
/// Serializes as `#rrggbbaa`; parses `#rrggbb`, `#rrggbbaa` and a few CSS
/// color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    pub const GREEN: Rgba = Rgba::new(0, 128, 0, 255);
    pub const BLUE: Rgba = Rgba::new(0, 0, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex or named color.
    pub fn parse(value: &str) -> SnapLineResult<Self> {
        let value = value.trim();
        let named = match value.to_ascii_lowercase().as_str() {
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        let invalid = || SnapError::Settings(format!("Invalid color: {value:?}"));
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = SnapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        format!("#{:02x}{:02x}{:02x}{:02x}", color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style of the two guide lines.
///
/// Built once from defaults plus caller overrides and never changed
/// afterwards; the fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSettings {
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f64,
    selectable: bool,
    evented: bool,
    origin_x: Origin,
    origin_y: Origin,
    active_color: Rgba,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            fill: Rgba::RED,
            stroke: Rgba::RED,
            stroke_width: 1.0,
            selectable: false,
            evented: false,
            origin_x: Origin::Center,
            origin_y: Origin::Center,
            active_color: Rgba::GREEN,
        }
    }
}

/// Caller overrides for [`AxisSettings`]. Unset keys keep their default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AxisSettingsOverrides {
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: Option<f64>,
    pub selectable: Option<bool>,
    pub evented: Option<bool>,
    pub origin_x: Option<Origin>,
    pub origin_y: Option<Origin>,
    pub active_color: Option<Rgba>,
}

impl AxisSettings {
    /// Merge `overrides` onto the defaults; an override wins per key.
    pub fn with_overrides(overrides: &AxisSettingsOverrides) -> SnapLineResult<Self> {
        let defaults = Self::default();
        let stroke_width = overrides.stroke_width.unwrap_or(defaults.stroke_width);
        if !stroke_width.is_finite() || stroke_width < 0.0 {
            return Err(SnapError::Settings(format!(
                "Invalid stroke width: {stroke_width}"
            )));
        }

        Ok(Self {
            fill: overrides.fill.unwrap_or(defaults.fill),
            stroke: overrides.stroke.unwrap_or(defaults.stroke),
            stroke_width,
            selectable: overrides.selectable.unwrap_or(defaults.selectable),
            evented: overrides.evented.unwrap_or(defaults.evented),
            origin_x: overrides.origin_x.unwrap_or(defaults.origin_x),
            origin_y: overrides.origin_y.unwrap_or(defaults.origin_y),
            active_color: overrides.active_color.unwrap_or(defaults.active_color),
        })
    }

    /// Parse overrides from JSON using the host's key names and merge them.
    pub fn from_json(json: &str) -> SnapLineResult<Self> {
        let overrides: AxisSettingsOverrides =
            serde_json::from_str(json).map_err(|e| SnapError::Settings(e.to_string()))?;
        Self::with_overrides(&overrides)
    }

    pub fn fill(&self) -> Rgba {
        self.fill
    }

    pub fn stroke(&self) -> Rgba {
        self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn selectable(&self) -> bool {
        self.selectable
    }

    /// Whether the guide lines receive pointer events.
    pub fn evented(&self) -> bool {
        self.evented
    }

    /// Origin mode of the guide lines themselves.
    pub fn origin(&self, axis: Axis) -> Origin {
        match axis {
            Axis::Horizontal => self.origin_x,
            Axis::Vertical => self.origin_y,
        }
    }

    /// Fill and stroke color of a guide showing an alignment.
    pub fn active_color(&self) -> Rgba {
        self.active_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AxisSettings::default();
        assert_eq!(settings.fill(), Rgba::RED);
        assert_eq!(settings.stroke(), Rgba::RED);
        assert!((settings.stroke_width() - 1.0).abs() < f64::EPSILON);
        assert!(!settings.selectable());
        assert!(!settings.evented());
        assert_eq!(settings.origin(Axis::Horizontal), Origin::Center);
        assert_eq!(settings.origin(Axis::Vertical), Origin::Center);
        assert_eq!(settings.active_color(), Rgba::GREEN);
    }

    #[test]
    fn test_override_wins_per_key() {
        let settings =
            AxisSettings::from_json(r##"{ "stroke": "#0000ff", "strokeWidth": 2.5 }"##).unwrap();
        assert_eq!(settings.stroke(), Rgba::BLUE);
        assert!((settings.stroke_width() - 2.5).abs() < f64::EPSILON);
        // Untouched keys keep their defaults.
        assert_eq!(settings.fill(), Rgba::RED);
        assert!(!settings.selectable());
    }

    #[test]
    fn test_empty_overrides_equal_defaults() {
        let settings = AxisSettings::from_json("{}").unwrap();
        assert_eq!(settings, AxisSettings::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = AxisSettings::from_json(r#"{ "strokeDash": [5, 5] }"#).unwrap_err();
        assert!(matches!(err, SnapError::Settings(_)));
    }

    #[test]
    fn test_negative_stroke_width_is_rejected() {
        let overrides = AxisSettingsOverrides {
            stroke_width: Some(-1.0),
            ..Default::default()
        };
        assert!(AxisSettings::with_overrides(&overrides).is_err());
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(Rgba::parse("green").unwrap(), Rgba::GREEN);
        assert_eq!(Rgba::parse("#ff000080").unwrap(), Rgba::new(255, 0, 0, 128));
        assert_eq!(Rgba::parse(" #00FF00 ").unwrap(), Rgba::new(0, 255, 0, 255));
        assert!(Rgba::parse("#12345").is_err());
        assert!(Rgba::parse("chartreuse").is_err());
        assert!(Rgba::parse("#gg0000").is_err());
    }

    #[test]
    fn test_color_string_round_trip() {
        let text: String = Rgba::new(1, 2, 3, 4).into();
        assert_eq!(text, "#01020304");
        assert_eq!(Rgba::parse(&text).unwrap(), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba::GREEN.into();
        assert_eq!(Rgba::from(color), Rgba::GREEN);
    }
}
