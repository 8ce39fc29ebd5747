use tracing::debug;

use crate::core::{UnaryFunction, format_display_number, parse_display_number};
use crate::render::Renderer;

use super::{CalculatorEngine, PluginEvent};

impl<R: Renderer> CalculatorEngine<R> {
    pub fn memory_clear(&mut self) {
        self.core.state.set_memory_value(0.0);
        self.emit_memory_changed();
    }

    /// Replaces the input with the stored value and marks it as committed.
    pub fn memory_recall(&mut self) {
        let state = &mut self.core.state;
        state.set_current_input(format_display_number(state.memory_value()));
        state.set_should_reset_input(true);
        self.emit_plugin_event(PluginEvent::UnaryApplied {
            function: UnaryFunction::MemoryRecall,
        });
    }

    pub fn memory_add(&mut self) {
        let state = &mut self.core.state;
        let value = parse_display_number(state.current_input());
        state.set_memory_value(state.memory_value() + value);
        self.emit_memory_changed();
    }

    pub fn memory_subtract(&mut self) {
        let state = &mut self.core.state;
        let value = parse_display_number(state.current_input());
        state.set_memory_value(state.memory_value() - value);
        self.emit_memory_changed();
    }

    fn emit_memory_changed(&mut self) {
        let indicator = self.core.state.memory_indicator();
        debug!(
            memory_value = self.core.state.memory_value(),
            indicator, "memory updated"
        );
        self.emit_plugin_event(PluginEvent::MemoryChanged { indicator });
    }
}
