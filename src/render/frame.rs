use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Everything a presentation layer needs to draw the calculator display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Primary display line (current input or error marker).
    pub primary: String,
    /// History line (`"<operand> <symbol>"` or empty).
    pub history: String,
    pub memory_indicator: bool,
}

impl DisplayFrame {
    #[must_use]
    pub fn new(primary: impl Into<String>, history: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            history: history.into(),
            memory_indicator: false,
        }
    }

    #[must_use]
    pub fn with_memory_indicator(mut self, visible: bool) -> Self {
        self.memory_indicator = visible;
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.primary.is_empty() {
            return Err(CalcError::InvalidData(
                "primary display text must not be empty".to_owned(),
            ));
        }
        if self.primary.contains('\n') || self.history.contains('\n') {
            return Err(CalcError::InvalidData(
                "display text must be a single line".to_owned(),
            ));
        }
        Ok(())
    }
}
