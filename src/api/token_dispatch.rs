use tracing::trace;

use crate::core::CalculatorToken;
use crate::error::CalcResult;
use crate::render::Renderer;

use super::CalculatorEngine;

impl<R: Renderer> CalculatorEngine<R> {
    /// Routes one input token to the matching operation.
    pub fn press(&mut self, token: CalculatorToken) {
        trace!(%token, "token pressed");
        match token {
            CalculatorToken::Digit(digit) => self.append_digit(digit),
            CalculatorToken::DecimalPoint => self.append_decimal_point(),
            CalculatorToken::Operator(operator) => self.select_operator(operator),
            CalculatorToken::Equals => self.calculate(),
            CalculatorToken::Function(function) => self.apply_unary(function),
        }
    }

    /// Parses and presses a single token given in its text form.
    ///
    /// Unrecognized text is rejected without touching the state.
    pub fn press_str(&mut self, token: &str) -> CalcResult<()> {
        let token = token.parse::<CalculatorToken>()?;
        self.press(token);
        Ok(())
    }

    /// Presses every token of a whitespace separated script in order.
    ///
    /// The whole script is parsed up front, so a bad token leaves the state
    /// untouched.
    pub fn press_script(&mut self, script: &str) -> CalcResult<()> {
        for token in CalculatorToken::parse_script(script)? {
            self.press(token);
        }
        Ok(())
    }
}
