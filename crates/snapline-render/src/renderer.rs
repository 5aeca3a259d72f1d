//! Renderer trait abstraction.

use kurbo::Affine;
use snapline_core::Surface;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a, S: Surface> {
    /// The surface whose guides are drawn.
    pub surface: &'a S,
    /// Canvas to screen transform.
    pub transform: Affine,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a, S: Surface> RenderContext<'a, S> {
    /// Create a new render context with an identity transform.
    pub fn new(surface: &'a S) -> Self {
        Self {
            surface,
            transform: Affine::IDENTITY,
            scale_factor: 1.0,
        }
    }

    /// Set the canvas to screen transform (camera pan/zoom).
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Check that the frame can be drawn at all.
    pub fn validate(&self) -> RenderResult<()> {
        let det = self.transform.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(RendererError::InvalidTransform(format!(
                "determinant {det} is not invertible"
            )));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(RendererError::RenderFailed(format!(
                "invalid scale factor {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the draw commands for the guide lines of one frame.
    fn build_scene<S: Surface>(&mut self, ctx: &RenderContext<'_, S>) -> RenderResult<()>;
}
