use crate::error::CalcResult;
use crate::render::{DisplayFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content and keeps the last frame so tests can
/// assert on what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_frame: Option<DisplayFrame>,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &DisplayFrame) -> CalcResult<()> {
        frame.validate()?;
        self.last_frame = Some(frame.clone());
        self.render_count += 1;
        Ok(())
    }
}
