use crate::error::CalcResult;
use crate::render::{DisplayFrame, Renderer};

use super::{PluginEvent, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `CalculatorEngine` owns the calculator state, applies every input
/// operation to it and hands display frames to the renderer on request.
/// Operations are synchronous and never fail: arithmetic faults surface as
/// the configured error marker in the primary display.
pub struct CalculatorEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> CalculatorEngine<R> {
    /// Builds the frame a presentation layer should draw for the current state.
    #[must_use]
    pub fn display_frame(&self) -> DisplayFrame {
        let state = &self.core.state;
        DisplayFrame::new(state.current_input(), state.previous_input())
            .with_memory_indicator(state.memory_indicator())
    }

    pub fn render(&mut self) -> CalcResult<()> {
        let frame = self.display_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
