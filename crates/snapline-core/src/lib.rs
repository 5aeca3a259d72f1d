//! Snapline Core Library
//!
//! Center-alignment snapping for objects dragged on a 2D canvas, plus the
//! transient guide lines that show which axis snapped.

pub mod axis;
pub mod canvas;
pub mod controller;
pub mod engine;
pub mod error;
pub mod event;
pub mod guide;
pub mod object;
pub mod origin;
pub mod settings;
pub mod surface;

pub use axis::Axis;
pub use canvas::Canvas;
pub use controller::{GuideController, GuideState};
pub use engine::{AlignmentEngine, MatchPolicy, SnapOutcome, SnapResult, DEFAULT_TOLERANCE};
pub use error::{SnapError, SnapLineResult};
pub use event::CanvasEvent;
pub use guide::{GuideLine, GuideTint, GUIDE_HALF_LENGTH};
pub use object::{CanvasObject, DrawableId};
pub use origin::{center_of, leading_for, Origin};
pub use settings::{AxisSettings, AxisSettingsOverrides, Rgba};
pub use surface::{Drawable, Surface};
