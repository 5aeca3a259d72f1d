//! Guide line lifecycle across a drag gesture.

use crate::axis::Axis;
use crate::engine::{AlignmentEngine, SnapOutcome, SnapResult};
use crate::error::{SnapError, SnapLineResult};
use crate::event::CanvasEvent;
use crate::guide::{GuideLine, GuideTint};
use crate::object::DrawableId;
use crate::settings::AxisSettings;
use crate::surface::{Drawable, Surface};

/// Whether the guide pair currently exists on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideState {
    /// No guide lines exist.
    Absent,
    /// Both guide lines exist; each is shown or hidden independently.
    Active,
}

/// Ids of the two guide lines, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GuidePair {
    horizontal: DrawableId,
    vertical: DrawableId,
}

impl GuidePair {
    fn id(&self, axis: Axis) -> DrawableId {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Snaps the dragged object and keeps the guide pair in sync with drag state.
///
/// The controller never holds a reference to the surface; every handler takes
/// it as an argument. Guide lines it adds are only ever touched through the
/// ids it keeps here.
#[derive(Debug)]
pub struct GuideController {
    settings: AxisSettings,
    engine: AlignmentEngine,
    guides: Option<GuidePair>,
}

impl Default for GuideController {
    fn default() -> Self {
        Self::new(AxisSettings::default())
    }
}

impl GuideController {
    /// Create a controller with the default engine.
    pub fn new(settings: AxisSettings) -> Self {
        Self {
            settings,
            engine: AlignmentEngine::default(),
            guides: None,
        }
    }

    /// Use a custom engine (tolerance, match policy).
    pub fn with_engine(mut self, engine: AlignmentEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn settings(&self) -> &AxisSettings {
        &self.settings
    }

    pub fn engine(&self) -> &AlignmentEngine {
        &self.engine
    }

    pub fn state(&self) -> GuideState {
        match self.guides {
            Some(_) => GuideState::Active,
            None => GuideState::Absent,
        }
    }

    /// Id of the guide marking `axis`, while active.
    pub fn guide_id(&self, axis: Axis) -> Option<DrawableId> {
        self.guides.map(|pair| pair.id(axis))
    }

    /// Dispatch a host event. Returns the snap result for movement frames.
    pub fn handle_event<S: Surface>(
        &mut self,
        surface: &mut S,
        event: &CanvasEvent,
    ) -> SnapLineResult<Option<SnapResult>> {
        log::trace!("{} for {}", event.name(), event.target());
        match *event {
            CanvasEvent::ObjectMoving { target } => self.on_move(surface, target).map(Some),
            CanvasEvent::ObjectMoved { .. } => {
                self.on_drag_end(surface);
                Ok(None)
            }
        }
    }

    /// Make sure both guide lines exist on the surface.
    pub fn on_drag_start<S: Surface>(&mut self, surface: &mut S) -> SnapLineResult<()> {
        self.ensure_guides(surface).map(|_| ())
    }

    /// Handle one drag frame for `target`.
    ///
    /// Creates the guides if needed, snaps `target` against every other object
    /// on the surface and shows the guide of each axis that aligned.
    pub fn on_move<S: Surface>(
        &mut self,
        surface: &mut S,
        target: DrawableId,
    ) -> SnapLineResult<SnapResult> {
        let moving = match surface.drawable(target) {
            Some(Drawable::Object(obj)) => obj.clone(),
            Some(Drawable::Guide(_)) => return Err(SnapError::NotAnObject(target)),
            None => return Err(SnapError::UnknownObject(target)),
        };

        let pair = self.ensure_guides(surface)?;
        let result = self.engine.compute_snap(&moving, surface.objects())?;

        if result.is_snapped() {
            if let Some(obj) = surface.object_mut(target) {
                result.apply_to(obj);
            }
        }

        for axis in Axis::ALL {
            let Some(guide) = surface.guide_mut(pair.id(axis)) else {
                continue;
            };
            match result.outcome(axis) {
                SnapOutcome::Snap { coordinate, .. } => {
                    if guide.set_coordinate(coordinate) {
                        log::debug!("{axis:?} guide moved to {coordinate}");
                    }
                    guide.set_tint(GuideTint::Active);
                    guide.set_visible(true);
                }
                SnapOutcome::NoSnap => guide.set_visible(false),
            }
        }

        surface.request_render();
        Ok(result)
    }

    /// Remove both guide lines. Does nothing if they are already gone.
    pub fn on_drag_end<S: Surface>(&mut self, surface: &mut S) {
        let Some(pair) = self.guides.take() else {
            return;
        };
        for axis in Axis::ALL {
            surface.remove(pair.id(axis));
        }
        surface.request_render();
        log::debug!("removed guide lines");
    }

    /// Return the live guide pair, creating it if absent.
    ///
    /// If the host removed one of the lines behind our back, the other one is
    /// removed as well and the controller goes back to absent.
    fn ensure_guides<S: Surface>(&mut self, surface: &mut S) -> SnapLineResult<GuidePair> {
        if let Some(pair) = self.guides {
            let missing = Axis::ALL
                .into_iter()
                .map(|axis| pair.id(axis))
                .find(|&id| surface.guide(id).is_none());
            let Some(missing) = missing else {
                return Ok(pair);
            };
            log::warn!("guide line {missing} disappeared mid-drag; resetting guides");
            self.on_drag_end(surface);
            return Err(SnapError::GuideDetached(missing));
        }

        let pair = GuidePair {
            horizontal: surface.add(GuideLine::new(Axis::Horizontal, &self.settings).into()),
            vertical: surface.add(GuideLine::new(Axis::Vertical, &self.settings).into()),
        };
        self.guides = Some(pair);
        surface.request_render();
        log::debug!("created guide lines");
        Ok(pair)
    }
}
