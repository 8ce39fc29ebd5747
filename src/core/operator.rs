use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary operator that can sit pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Symbol used both as input token and in the history display.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }

    /// Applies the operator to two operands.
    ///
    /// Only a zero divisor is rejected here; overflow and `NaN` checks are the
    /// caller's concern.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticFault> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(ArithmeticFault::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            // `powf` yields 1 for these; the display treats them as undefined.
            Self::Power if rhs.is_nan() || (lhs.abs() == 1.0 && rhs.is_infinite()) => {
                Ok(f64::NAN)
            }
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

/// Named single-key functions acting on the current input or on memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Square,
    SquareRoot,
    Percentage,
    SignFlip,
    Reciprocal,
    PowerPrefix,
    Backspace,
    Clear,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

impl UnaryFunction {
    pub const ALL: [Self; 12] = [
        Self::Square,
        Self::SquareRoot,
        Self::Percentage,
        Self::SignFlip,
        Self::Reciprocal,
        Self::PowerPrefix,
        Self::Backspace,
        Self::Clear,
        Self::MemoryClear,
        Self::MemoryRecall,
        Self::MemoryAdd,
        Self::MemorySubtract,
    ];

    #[must_use]
    pub fn token_name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::SquareRoot => "sqrt",
            Self::Percentage => "percentage",
            Self::SignFlip => "sign",
            Self::Reciprocal => "inverse",
            Self::PowerPrefix => "power",
            Self::Backspace => "backspace",
            Self::Clear => "clear",
            Self::MemoryClear => "mc",
            Self::MemoryRecall => "mr",
            Self::MemoryAdd => "m+",
            Self::MemorySubtract => "m-",
        }
    }

    #[must_use]
    pub fn from_token_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.token_name() == name)
    }

    /// Returns `true` for functions that replace the input with a computed value.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Square | Self::SquareRoot | Self::Percentage | Self::SignFlip | Self::Reciprocal
        )
    }

    /// Evaluates a numeric function against `value`.
    ///
    /// Returns `None` for functions that are not value transforms.
    pub fn evaluate(self, value: f64) -> Option<Result<f64, ArithmeticFault>> {
        let result = match self {
            Self::Square => Ok(value * value),
            Self::SquareRoot => {
                if value < 0.0 {
                    Err(ArithmeticFault::NegativeSquareRoot)
                } else {
                    Ok(value.sqrt())
                }
            }
            Self::Percentage => Ok(value / 100.0),
            Self::SignFlip => Ok(-value),
            Self::Reciprocal => {
                if value == 0.0 {
                    Err(ArithmeticFault::ReciprocalOfZero)
                } else {
                    Ok(1.0 / value)
                }
            }
            _ => return None,
        };
        Some(result)
    }
}

/// Domain faults that collapse into the display error marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("reciprocal of zero")]
    ReciprocalOfZero,
    #[error("result is infinite or not a number")]
    NumericOverflowOrNaN,
}

#[cfg(test)]
mod tests {
    use super::{ArithmeticFault, Operator, UnaryFunction};

    #[test]
    fn operator_symbols_map_back_to_operators() {
        for operator in Operator::ALL {
            assert_eq!(Operator::from_symbol(operator.symbol()), Some(operator));
        }
        assert_eq!(Operator::from_symbol("x"), None);
    }

    #[test]
    fn divide_by_zero_is_a_fault() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(ArithmeticFault::DivisionByZero)
        );
        assert_eq!(Operator::Divide.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn power_raises_left_by_right() {
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert!(Operator::Power.apply(-8.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn unit_base_with_undefined_exponent_is_nan() {
        assert!(Operator::Power.apply(1.0, f64::NAN).unwrap().is_nan());
        assert!(Operator::Power.apply(1.0, f64::INFINITY).unwrap().is_nan());
        assert!(Operator::Power.apply(-1.0, f64::NEG_INFINITY).unwrap().is_nan());
        assert!(Operator::Power.apply(3.0, f64::NAN).unwrap().is_nan());
        assert_eq!(Operator::Power.apply(f64::NAN, 0.0), Ok(1.0));
        assert_eq!(Operator::Power.apply(2.0, f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(Operator::Power.apply(1.0, 1e300), Ok(1.0));
    }

    #[test]
    fn numeric_functions_report_domain_faults() {
        assert_eq!(
            UnaryFunction::SquareRoot.evaluate(-4.0),
            Some(Err(ArithmeticFault::NegativeSquareRoot))
        );
        assert_eq!(
            UnaryFunction::Reciprocal.evaluate(0.0),
            Some(Err(ArithmeticFault::ReciprocalOfZero))
        );
        assert_eq!(UnaryFunction::Reciprocal.evaluate(4.0), Some(Ok(0.25)));
        assert_eq!(UnaryFunction::Percentage.evaluate(50.0), Some(Ok(0.5)));
        assert_eq!(UnaryFunction::MemoryRecall.evaluate(1.0), None);
    }

    #[test]
    fn only_value_transforms_evaluate() {
        for function in UnaryFunction::ALL {
            assert_eq!(function.evaluate(2.0).is_some(), function.is_numeric());
        }
    }

    #[test]
    fn function_token_names_are_unique() {
        for function in UnaryFunction::ALL {
            assert_eq!(
                UnaryFunction::from_token_name(function.token_name()),
                Some(function)
            );
        }
    }
}
