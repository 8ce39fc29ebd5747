use tracing::debug;

use crate::core::{
    ArithmeticFault, Operator, format_display_number, parse_display_number, round_to_precision,
};
use crate::render::Renderer;

use super::{CalculatorEngine, PluginEvent};

impl<R: Renderer> CalculatorEngine<R> {
    /// Selects the pending binary operator.
    ///
    /// When an operator is already pending and a second operand has been
    /// typed, the pending expression is evaluated first (left-to-right
    /// chaining). Pressing operators back to back only swaps the trailing
    /// symbol in the history; the left operand is kept and nothing is
    /// recomputed.
    pub fn select_operator(&mut self, operator: Operator) {
        if self.core.state.pending_operator().is_some() && !self.core.state.should_reset_input() {
            self.calculate();
        }

        let state = &mut self.core.state;
        let history = if state.previous_input().is_empty() {
            let value = parse_display_number(state.current_input());
            format!("{} {}", format_display_number(value), operator.symbol())
        } else {
            format!("{} {}", state.left_operand_text(), operator.symbol())
        };

        debug!(%history, ?operator, "operator selected");
        state.set_previous_input(history);
        state.set_pending_operator(Some(operator));
        state.set_should_reset_input(true);
        self.emit_plugin_event(PluginEvent::OperatorSelected { operator });
    }

    /// Evaluates the pending expression.
    ///
    /// No-op without a pending operator or while the reset flag is set, so a
    /// second `=` in a row changes nothing. Results are rounded to
    /// `result_precision` fractional digits; faults and non-finite results
    /// become the error marker. The pending expression is cleared either way.
    pub fn calculate(&mut self) {
        let state = &self.core.state;
        let Some(operator) = state.pending_operator() else {
            return;
        };
        if state.should_reset_input() {
            return;
        }

        let lhs = parse_display_number(state.left_operand_text());
        let rhs = parse_display_number(state.current_input());
        let outcome = operator.apply(lhs, rhs).and_then(|result| {
            if result.is_finite() {
                Ok(result)
            } else {
                Err(ArithmeticFault::NumericOverflowOrNaN)
            }
        });

        let faulted = match outcome {
            Ok(result) => {
                let rounded = round_to_precision(result, self.core.config.result_precision);
                let text = format_display_number(rounded);
                debug!(lhs, rhs, ?operator, result = %text, "expression evaluated");
                self.core.state.commit_result(text);
                false
            }
            Err(fault) => {
                debug!(lhs, rhs, ?operator, %fault, "expression evaluation faulted");
                let marker = self.core.config.error_marker.clone();
                self.core.state.commit_result(marker);
                true
            }
        };

        self.emit_plugin_event(PluginEvent::Evaluated { faulted });
    }
}
