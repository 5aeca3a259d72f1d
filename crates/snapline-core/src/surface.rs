//! Host surface abstraction.

use crate::guide::GuideLine;
use crate::object::{CanvasObject, DrawableId};

/// Anything a surface can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Object(CanvasObject),
    Guide(GuideLine),
}

impl Drawable {
    pub fn id(&self) -> DrawableId {
        match self {
            Drawable::Object(obj) => obj.id(),
            Drawable::Guide(guide) => guide.id(),
        }
    }

    pub fn as_object(&self) -> Option<&CanvasObject> {
        match self {
            Drawable::Object(obj) => Some(obj),
            Drawable::Guide(_) => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut CanvasObject> {
        match self {
            Drawable::Object(obj) => Some(obj),
            Drawable::Guide(_) => None,
        }
    }

    pub fn as_guide(&self) -> Option<&GuideLine> {
        match self {
            Drawable::Guide(guide) => Some(guide),
            Drawable::Object(_) => None,
        }
    }

    pub fn as_guide_mut(&mut self) -> Option<&mut GuideLine> {
        match self {
            Drawable::Guide(guide) => Some(guide),
            Drawable::Object(_) => None,
        }
    }
}

impl From<CanvasObject> for Drawable {
    fn from(obj: CanvasObject) -> Self {
        Drawable::Object(obj)
    }
}

impl From<GuideLine> for Drawable {
    fn from(guide: GuideLine) -> Self {
        Drawable::Guide(guide)
    }
}

/// The graphics surface the guides live on.
///
/// Hosts implement the required methods; lookups by kind are provided.
pub trait Surface {
    /// All drawables, back to front.
    fn drawables(&self) -> impl Iterator<Item = &Drawable>;

    fn drawable(&self, id: DrawableId) -> Option<&Drawable>;

    fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable>;

    /// Add a drawable on top and return its id.
    fn add(&mut self, drawable: Drawable) -> DrawableId;

    fn remove(&mut self, id: DrawableId) -> Option<Drawable>;

    /// Schedule a redraw. Hosts may debounce this.
    fn request_render(&mut self);

    /// All canvas objects, back to front.
    fn objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.drawables().filter_map(Drawable::as_object)
    }

    /// All guide lines, back to front.
    fn guides(&self) -> impl Iterator<Item = &GuideLine> {
        self.drawables().filter_map(Drawable::as_guide)
    }

    fn object(&self, id: DrawableId) -> Option<&CanvasObject> {
        self.drawable(id).and_then(Drawable::as_object)
    }

    fn object_mut(&mut self, id: DrawableId) -> Option<&mut CanvasObject> {
        self.drawable_mut(id).and_then(Drawable::as_object_mut)
    }

    fn guide(&self, id: DrawableId) -> Option<&GuideLine> {
        self.drawable(id).and_then(Drawable::as_guide)
    }

    fn guide_mut(&mut self, id: DrawableId) -> Option<&mut GuideLine> {
        self.drawable_mut(id).and_then(Drawable::as_guide_mut)
    }
}
