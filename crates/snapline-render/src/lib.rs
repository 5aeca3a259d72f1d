//! Snapline Render Library
//!
//! Renderer abstraction for Snapline guide lines. The bundled
//! [`DisplayList`] turns visible guides into stroke commands that any 2D
//! backend can replay.

mod display_list;
mod renderer;

pub use display_list::{DisplayList, StrokeCommand};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
