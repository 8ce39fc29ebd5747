use crate::error::{CalcError, CalcResult};
use crate::render::Renderer;

use super::{CalculatorEngine, CalculatorSnapshot};

impl<R: Renderer> CalculatorEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> CalculatorSnapshot {
        let state = &self.core.state;
        CalculatorSnapshot {
            current_input: state.current_input().to_owned(),
            previous_input: state.previous_input().to_owned(),
            pending_operator: state.pending_operator(),
            should_reset_input: state.should_reset_input(),
            memory_value: state.memory_value(),
            memory_indicator: state.memory_indicator(),
            metadata: self.core.runtime.metadata.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
