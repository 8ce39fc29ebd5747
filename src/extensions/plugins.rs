use serde::{Deserialize, Serialize};

use crate::core::{Operator, UnaryFunction};

/// Read-only state summary passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub pending_operator: Option<Operator>,
    pub should_reset_input: bool,
    pub memory_value: f64,
    pub memory_indicator: bool,
    pub input_len: usize,
    pub shows_error: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    InputChanged,
    OperatorSelected { operator: Operator },
    Evaluated { faulted: bool },
    UnaryApplied { function: UnaryFunction },
    MemoryChanged { indicator: bool },
    Cleared,
    Rendered,
}

/// Observer hook for bounded custom logic such as history tapes or
/// accessibility announcers.
pub trait CalculatorPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
