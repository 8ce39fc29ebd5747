use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Text shown in the primary display before any input.
pub const DEFAULT_INPUT: &str = "0";

/// Mutable calculator state owned by a single engine instance.
///
/// `current_input` is both the primary display text and the parse source of
/// the right-hand operand. `previous_input` holds the `"<operand> <symbol>"`
/// history fragment while an operator is pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    current_input: String,
    previous_input: String,
    pending_operator: Option<Operator>,
    should_reset_input: bool,
    #[serde(with = "crate::core::number::display_number_serde")]
    memory_value: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: DEFAULT_INPUT.to_owned(),
            previous_input: String::new(),
            pending_operator: None,
            should_reset_input: false,
            memory_value: 0.0,
        }
    }
}

impl CalculatorState {
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn previous_input(&self) -> &str {
        &self.previous_input
    }

    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    #[must_use]
    pub fn should_reset_input(&self) -> bool {
        self.should_reset_input
    }

    #[must_use]
    pub fn memory_value(&self) -> f64 {
        self.memory_value
    }

    /// Memory indicator visibility. `NaN` memory counts as non-zero.
    #[must_use]
    pub fn memory_indicator(&self) -> bool {
        self.memory_value != 0.0
    }

    /// First whitespace-separated fragment of the history text.
    #[must_use]
    pub fn left_operand_text(&self) -> &str {
        self.previous_input.split(' ').next().unwrap_or_default()
    }

    pub(crate) fn set_current_input(&mut self, text: impl Into<String>) {
        self.current_input = text.into();
    }

    pub(crate) fn push_input(&mut self, text: &str) {
        self.current_input.push_str(text);
    }

    pub(crate) fn pop_input(&mut self) {
        self.current_input.pop();
    }

    pub(crate) fn set_previous_input(&mut self, text: impl Into<String>) {
        self.previous_input = text.into();
    }

    pub(crate) fn set_pending_operator(&mut self, operator: Option<Operator>) {
        self.pending_operator = operator;
    }

    pub(crate) fn set_should_reset_input(&mut self, reset: bool) {
        self.should_reset_input = reset;
    }

    pub(crate) fn set_memory_value(&mut self, value: f64) {
        self.memory_value = value;
    }

    /// Clears the pending expression and marks the next digit as fresh input.
    pub(crate) fn commit_result(&mut self, text: impl Into<String>) {
        self.current_input = text.into();
        self.previous_input.clear();
        self.pending_operator = None;
        self.should_reset_input = true;
    }

    /// Restores defaults for everything except memory.
    pub(crate) fn reset_keep_memory(&mut self) {
        let memory_value = self.memory_value;
        *self = Self {
            memory_value,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::CalculatorState;
    use crate::core::Operator;

    #[test]
    fn reset_keeps_memory_only() {
        let mut state = CalculatorState::default();
        state.set_current_input("42");
        state.set_previous_input("7 +");
        state.set_pending_operator(Some(Operator::Add));
        state.set_should_reset_input(true);
        state.set_memory_value(3.0);

        state.reset_keep_memory();

        assert_eq!(state.current_input(), "0");
        assert_eq!(state.previous_input(), "");
        assert_eq!(state.pending_operator(), None);
        assert!(!state.should_reset_input());
        assert_eq!(state.memory_value(), 3.0);
        assert!(state.memory_indicator());
    }

    #[test]
    fn left_operand_is_first_history_fragment() {
        let mut state = CalculatorState::default();
        assert_eq!(state.left_operand_text(), "");
        state.set_previous_input("-2.5 *");
        assert_eq!(state.left_operand_text(), "-2.5");
    }

    #[test]
    fn nan_memory_turns_indicator_on() {
        let mut state = CalculatorState::default();
        assert!(!state.memory_indicator());
        state.set_memory_value(f64::NAN);
        assert!(state.memory_indicator());
    }
}
