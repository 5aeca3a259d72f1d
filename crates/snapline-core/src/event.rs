//! Drag events emitted by the host canvas.

use crate::object::DrawableId;

/// Event fired by the host for the object being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Fired once per drag frame.
    ObjectMoving { target: DrawableId },
    /// Fired once when the drag gesture ends.
    ObjectMoved { target: DrawableId },
}

impl CanvasEvent {
    /// Host event name (`object:moving` / `object:moved`).
    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::ObjectMoving { .. } => "object:moving",
            CanvasEvent::ObjectMoved { .. } => "object:moved",
        }
    }

    pub fn target(&self) -> DrawableId {
        match *self {
            CanvasEvent::ObjectMoving { target } | CanvasEvent::ObjectMoved { target } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_event_names_and_targets() {
        let id = Uuid::new_v4();
        let moving = CanvasEvent::ObjectMoving { target: id };
        let moved = CanvasEvent::ObjectMoved { target: id };
        assert_eq!(moving.name(), "object:moving");
        assert_eq!(moved.name(), "object:moved");
        assert_eq!(moving.target(), id);
        assert_eq!(moved.target(), id);
    }
}
