use tracing::debug;

use crate::core::{
    ArithmeticFault, Operator, UnaryFunction, format_display_number, parse_display_number,
    round_to_precision,
};
use crate::render::Renderer;

use super::{CalculatorEngine, PluginEvent, UnaryResultPolicy};

impl<R: Renderer> CalculatorEngine<R> {
    /// Applies a named single-key function.
    pub fn apply_unary(&mut self, function: UnaryFunction) {
        match function {
            UnaryFunction::Square
            | UnaryFunction::SquareRoot
            | UnaryFunction::Percentage
            | UnaryFunction::SignFlip
            | UnaryFunction::Reciprocal => self.apply_numeric_function(function),
            UnaryFunction::PowerPrefix => self.begin_power(),
            UnaryFunction::Backspace => self.backspace(),
            UnaryFunction::Clear => self.clear(),
            UnaryFunction::MemoryClear => self.memory_clear(),
            UnaryFunction::MemoryRecall => self.memory_recall(),
            UnaryFunction::MemoryAdd => self.memory_add(),
            UnaryFunction::MemorySubtract => self.memory_subtract(),
        }
    }

    /// Resets input and pending expression. Memory is left untouched.
    pub fn clear(&mut self) {
        self.core.state.reset_keep_memory();
        debug!("calculator cleared");
        self.emit_plugin_event(PluginEvent::Cleared);
    }

    /// Starts a power expression with the current input as base.
    ///
    /// The history keeps the input text verbatim (`"5. ^"`); the exponent is
    /// typed next and evaluated by `calculate()`.
    fn begin_power(&mut self) {
        let state = &mut self.core.state;
        let history = format!("{} {}", state.current_input(), Operator::Power.symbol());
        state.set_previous_input(history);
        state.set_pending_operator(Some(Operator::Power));
        state.set_should_reset_input(true);
        self.emit_plugin_event(PluginEvent::UnaryApplied {
            function: UnaryFunction::PowerPrefix,
        });
    }

    fn apply_numeric_function(&mut self, function: UnaryFunction) {
        let value = parse_display_number(self.core.state.current_input());
        let Some(outcome) = function.evaluate(value) else {
            return;
        };

        let outcome = match self.core.config.unary_result_policy {
            UnaryResultPolicy::Raw => outcome,
            UnaryResultPolicy::Guarded => outcome.and_then(|result| {
                if result.is_finite() {
                    Ok(round_to_precision(result, self.core.config.result_precision))
                } else {
                    Err(ArithmeticFault::NumericOverflowOrNaN)
                }
            }),
        };

        match outcome {
            Ok(result) => {
                let text = format_display_number(result);
                debug!(value, ?function, result = %text, "unary function applied");
                self.core.state.set_current_input(text);
            }
            Err(fault) => {
                debug!(value, ?function, %fault, "unary function faulted");
                let marker = self.core.config.error_marker.clone();
                self.core.state.set_current_input(marker);
                self.core.state.set_should_reset_input(true);
            }
        }

        self.emit_plugin_event(PluginEvent::UnaryApplied { function });
    }
}
