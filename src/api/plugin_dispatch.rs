use crate::render::Renderer;

use super::{CalculatorEngine, PluginContext, PluginEvent};

impl<R: Renderer> CalculatorEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let state = &self.core.state;
        PluginContext {
            pending_operator: state.pending_operator(),
            should_reset_input: state.should_reset_input(),
            memory_value: state.memory_value(),
            memory_indicator: state.memory_indicator(),
            input_len: state.current_input().len(),
            shows_error: self.shows_error(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
