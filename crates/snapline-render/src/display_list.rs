//! Backend-neutral list of guide strokes.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::Line;
use peniko::Color;
use snapline_core::{Axis, Surface};

/// One stroked guide line in screen coordinates.
#[derive(Debug, Clone)]
pub struct StrokeCommand {
    /// The axis the guide marks.
    pub axis: Axis,
    pub line: Line,
    pub color: Color,
    /// Stroke width in physical pixels.
    pub width: f64,
}

/// Renderer that records stroke commands instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<StrokeCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded by the last frame.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }
}

impl Renderer for DisplayList {
    fn build_scene<S: Surface>(&mut self, ctx: &RenderContext<'_, S>) -> RenderResult<()> {
        self.commands.clear();
        ctx.validate()?;

        for guide in ctx.surface.guides().filter(|guide| guide.is_visible()) {
            self.commands.push(StrokeCommand {
                axis: guide.axis(),
                line: ctx.transform * guide.line(),
                color: guide.stroke().into(),
                width: guide.stroke_width() * ctx.scale_factor,
            });
        }
        log::trace!("display list: {} guide strokes", self.commands.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RendererError;
    use kurbo::{Affine, Point, Size, Vec2};
    use snapline_core::{Canvas, CanvasObject, GuideController, Origin, GUIDE_HALF_LENGTH};

    fn centered(x: f64, y: f64) -> CanvasObject {
        CanvasObject::new(Point::new(x, y), Size::new(50.0, 50.0))
            .with_origin(Origin::Center, Origin::Center)
    }

    #[test]
    fn test_no_guides_no_commands() {
        let mut canvas = Canvas::new();
        canvas.add_object(centered(0.0, 0.0));
        let mut list = DisplayList::new();
        list.build_scene(&RenderContext::new(&canvas)).unwrap();
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_only_visible_guides_are_drawn() {
        let mut canvas = Canvas::new();
        let moving = canvas.add_object(centered(100.0, 100.0));
        canvas.add_object(centered(110.0, 800.0));
        let mut controller = GuideController::default();
        controller.on_move(&mut canvas, moving).unwrap();

        let mut list = DisplayList::new();
        list.build_scene(&RenderContext::new(&canvas)).unwrap();
        assert_eq!(list.commands().len(), 1);

        let command = &list.commands()[0];
        assert_eq!(command.axis, Axis::Horizontal);
        assert_eq!(command.line.p0, Point::new(110.0, -GUIDE_HALF_LENGTH));
        let rgba = command.color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0, 128, 0));
        assert!((command.width - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_and_scale_factor_apply() {
        let mut canvas = Canvas::new();
        let moving = canvas.add_object(centered(100.0, 100.0));
        canvas.add_object(centered(800.0, 105.0));
        let mut controller = GuideController::default();
        controller.on_move(&mut canvas, moving).unwrap();

        let ctx = RenderContext::new(&canvas)
            .with_transform(Affine::translate(Vec2::new(10.0, 20.0)) * Affine::scale(2.0))
            .with_scale_factor(2.0);
        let mut list = DisplayList::new();
        list.build_scene(&ctx).unwrap();

        let command = &list.commands()[0];
        assert_eq!(command.axis, Axis::Vertical);
        assert_eq!(command.line.p0.y, 230.0);
        assert!((command.width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_transform_is_rejected() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas).with_transform(Affine::scale(0.0));
        let mut list = DisplayList::new();
        assert!(matches!(
            list.build_scene(&ctx),
            Err(RendererError::InvalidTransform(_))
        ));
    }
}
