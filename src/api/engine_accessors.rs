use indexmap::IndexMap;

use crate::core::Operator;
use crate::interaction::CalculatorState;
use crate::render::Renderer;

use super::{CalculatorEngine, CalculatorEngineConfig};

impl<R: Renderer> CalculatorEngine<R> {
    /// Primary display text.
    #[must_use]
    pub fn current_input(&self) -> &str {
        self.core.state.current_input()
    }

    /// History display text; empty when no expression is pending.
    #[must_use]
    pub fn previous_input(&self) -> &str {
        self.core.state.previous_input()
    }

    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.core.state.pending_operator()
    }

    #[must_use]
    pub fn should_reset_input(&self) -> bool {
        self.core.state.should_reset_input()
    }

    #[must_use]
    pub fn memory_value(&self) -> f64 {
        self.core.state.memory_value()
    }

    #[must_use]
    pub fn memory_indicator(&self) -> bool {
        self.core.state.memory_indicator()
    }

    /// Returns `true` while the primary display shows the error marker.
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.core.state.current_input() == self.core.config.error_marker
    }

    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.core.state
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorEngineConfig {
        &self.core.config
    }

    /// Sets or updates host metadata carried into snapshots.
    ///
    /// `IndexMap` is used to preserve insertion order for stable snapshots.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.core
            .runtime
            .metadata
            .insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.core.runtime.metadata
    }
}
