use tracing::{trace, warn};

use crate::interaction::DEFAULT_INPUT;
use crate::render::Renderer;

use super::{CalculatorEngine, PluginEvent};

impl<R: Renderer> CalculatorEngine<R> {
    /// Types one decimal digit.
    ///
    /// A fresh number starts when the display shows `"0"` or the reset flag
    /// is set; otherwise the digit is appended until `max_input_len` is hit,
    /// after which digits are silently ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            warn!(%digit, "ignoring non-digit passed to append_digit");
            return;
        }

        let state = &mut self.core.state;
        if state.current_input() == DEFAULT_INPUT || state.should_reset_input() {
            state.set_current_input(digit);
            state.set_should_reset_input(false);
        } else if state.current_input().len() < self.core.config.max_input_len {
            state.push_input(digit.encode_utf8(&mut [0; 4]));
        } else {
            trace!(%digit, "input length limit reached");
            return;
        }

        trace!(input = state.current_input(), "digit appended");
        self.emit_plugin_event(PluginEvent::InputChanged);
    }

    /// Types the decimal point.
    ///
    /// Starts `"0."` after a committed operator or result; otherwise appends
    /// only when the input has no point yet and still has room.
    pub fn append_decimal_point(&mut self) {
        let state = &mut self.core.state;
        if state.should_reset_input() {
            state.set_current_input("0.");
            state.set_should_reset_input(false);
        } else if !state.current_input().contains('.')
            && state.current_input().len() < self.core.config.max_input_len
        {
            state.push_input(".");
        } else {
            return;
        }

        trace!(input = state.current_input(), "decimal point appended");
        self.emit_plugin_event(PluginEvent::InputChanged);
    }

    /// Drops the last typed character.
    ///
    /// A single character, or a minus sign followed by one character, falls
    /// back to `"0"`.
    pub fn backspace(&mut self) {
        let state = &mut self.core.state;
        let input = state.current_input();
        let len = input.chars().count();
        if len <= 1 || (len == 2 && input.starts_with('-')) {
            state.set_current_input(DEFAULT_INPUT);
        } else {
            state.pop_input();
        }

        trace!(input = state.current_input(), "backspace applied");
        self.emit_plugin_event(PluginEvent::InputChanged);
    }
}
