use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

use super::{Operator, UnaryFunction};

/// One discrete input event delivered by a presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorToken {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Function(UnaryFunction),
}

impl FromStr for CalculatorToken {
    type Err = CalcError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if ch.is_ascii_digit() {
                return Ok(Self::Digit(ch));
            }
        }

        match input {
            "." => Ok(Self::DecimalPoint),
            "=" => Ok(Self::Equals),
            _ => Operator::from_symbol(input)
                .map(Self::Operator)
                .or_else(|| UnaryFunction::from_token_name(input).map(Self::Function))
                .ok_or_else(|| CalcError::UnrecognizedToken(input.to_owned())),
        }
    }
}

impl fmt::Display for CalculatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(operator) => f.write_str(operator.symbol()),
            Self::Equals => f.write_str("="),
            Self::Function(function) => f.write_str(function.token_name()),
        }
    }
}

impl CalculatorToken {
    /// Parses a whitespace separated token script such as `"5 + 3 ="`.
    pub fn parse_script(script: &str) -> Result<Vec<Self>, CalcError> {
        script.split_whitespace().map(str::parse).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CalculatorToken;
    use crate::core::{Operator, UnaryFunction};
    use crate::error::CalcError;

    #[test]
    fn parses_every_token_family() {
        assert_eq!("7".parse::<CalculatorToken>().unwrap(), CalculatorToken::Digit('7'));
        assert_eq!(".".parse::<CalculatorToken>().unwrap(), CalculatorToken::DecimalPoint);
        assert_eq!("=".parse::<CalculatorToken>().unwrap(), CalculatorToken::Equals);
        assert_eq!(
            "^".parse::<CalculatorToken>().unwrap(),
            CalculatorToken::Operator(Operator::Power)
        );
        assert_eq!(
            "m-".parse::<CalculatorToken>().unwrap(),
            CalculatorToken::Function(UnaryFunction::MemorySubtract)
        );
    }

    #[test]
    fn rejects_unknown_and_multi_digit_tokens() {
        assert!(matches!(
            "42".parse::<CalculatorToken>(),
            Err(CalcError::UnrecognizedToken(token)) if token == "42"
        ));
        assert!("cos".parse::<CalculatorToken>().is_err());
        assert!("".parse::<CalculatorToken>().is_err());
    }

    #[test]
    fn script_parsing_preserves_order() {
        let tokens = CalculatorToken::parse_script("1 . 5 * 2 =").unwrap();
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["1", ".", "5", "*", "2", "="]);
    }
}
