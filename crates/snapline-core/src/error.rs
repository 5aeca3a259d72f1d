//! Error types for snapping and guide management.

use crate::object::DrawableId;
use thiserror::Error;

/// Snapping errors.
///
/// All of these indicate a host integration bug rather than a runtime
/// condition; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapError {
    #[error("Unknown object: {0}")]
    UnknownObject(DrawableId),
    #[error("Drawable {0} is a guide line, not a canvas object")]
    NotAnObject(DrawableId),
    #[error("Invalid geometry on {id}: {field} = {value}")]
    InvalidGeometry {
        id: DrawableId,
        field: &'static str,
        value: f64,
    },
    #[error("Invalid snap tolerance: {0}")]
    InvalidTolerance(f64),
    #[error("Guide line {0} was removed from the surface during a drag")]
    GuideDetached(DrawableId),
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type for snapping operations.
pub type SnapLineResult<T> = Result<T, SnapError>;
