pub mod number;
pub mod operator;
pub mod token;

pub use number::{
    DEFAULT_RESULT_PRECISION, format_display_number, parse_display_number, round_half_up,
    round_to_precision,
};
pub use operator::{ArithmeticFault, Operator, UnaryFunction};
pub use token::CalculatorToken;
