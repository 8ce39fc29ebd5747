use std::fmt::Write as _;

use crate::error::{CalcError, CalcResult};
use crate::render::{DisplayFrame, Renderer};

/// Renders frames as a right-aligned two-line text panel.
///
/// The panel is rebuilt on every render. The memory indicator shows as an
/// `M` in the top-left corner.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    buffer: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(24)
    }
}

impl TextRenderer {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(2),
            buffer: String::new(),
        }
    }

    /// Text produced by the last render pass.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.buffer
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &DisplayFrame) -> CalcResult<()> {
        frame.validate()?;
        let marker = if frame.memory_indicator { "M" } else { " " };
        let inner = self.width - 1;

        self.buffer.clear();
        writeln!(self.buffer, "{marker}{:>inner$}", frame.history)
            .and_then(|()| writeln!(self.buffer, " {:>inner$}", frame.primary))
            .map_err(|e| CalcError::InvalidData(format!("failed to format display: {e}")))
    }
}
