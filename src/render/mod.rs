mod frame;
mod null_renderer;
mod text_renderer;

pub use frame::DisplayFrame;
pub use null_renderer::NullRenderer;
pub use text_renderer::TextRenderer;

use crate::error::CalcResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive a fully materialized `DisplayFrame` so drawing code stays
/// isolated from calculator state transitions.
pub trait Renderer {
    fn render(&mut self, frame: &DisplayFrame) -> CalcResult<()>;
}
