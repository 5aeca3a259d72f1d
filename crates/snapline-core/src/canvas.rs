//! In-memory canvas implementing [`Surface`].

use crate::object::{CanvasObject, DrawableId};
use crate::surface::{Drawable, Surface};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted form of a canvas. Guide lines are transient and never saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CanvasSnapshot {
    /// Objects in z-order (back to front).
    objects: Vec<CanvasObject>,
}

/// A canvas holding objects and guide lines.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// All drawables, keyed by ID.
    drawables: HashMap<DrawableId, Drawable>,
    /// Z-order of drawables (back to front).
    z_order: Vec<DrawableId>,
    /// Number of redraws requested so far.
    render_requests: usize,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object on top and return its id.
    pub fn add_object(&mut self, obj: CanvasObject) -> DrawableId {
        self.add(Drawable::Object(obj))
    }

    /// Move an object so its stored coordinates equal `position`.
    /// Returns false if there is no such object.
    pub fn set_object_position(&mut self, id: DrawableId, position: Point) -> bool {
        match self.object_mut(id) {
            Some(obj) => {
                obj.position = position;
                true
            }
            None => false,
        }
    }

    /// Number of drawables, guides included.
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Number of guide lines currently on the canvas.
    pub fn guide_count(&self) -> usize {
        self.guides().count()
    }

    /// Number of redraws requested since creation.
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }

    /// Serialize the canvas objects to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let snapshot = CanvasSnapshot {
            objects: self.objects().cloned().collect(),
        };
        serde_json::to_string_pretty(&snapshot)
    }

    /// Deserialize a canvas from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: CanvasSnapshot = serde_json::from_str(json)?;
        let mut canvas = Self::new();
        for obj in snapshot.objects {
            canvas.add_object(obj);
        }
        Ok(canvas)
    }
}

impl Surface for Canvas {
    fn drawables(&self) -> impl Iterator<Item = &Drawable> {
        self.z_order.iter().filter_map(|id| self.drawables.get(id))
    }

    fn drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(&id)
    }

    fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(&id)
    }

    fn add(&mut self, drawable: Drawable) -> DrawableId {
        let id = drawable.id();
        if self.drawables.insert(id, drawable).is_none() {
            self.z_order.push(id);
        }
        id
    }

    fn remove(&mut self, id: DrawableId) -> Option<Drawable> {
        self.z_order.retain(|&drawable_id| drawable_id != id);
        self.drawables.remove(&id)
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }
}
