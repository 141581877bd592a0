//! Arithmetic Error Module
//!
//! Error taxonomy shared by every checked number type in this crate.

/// Failure of a checked arithmetic operation or conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Result does not fit the declared width or exponent range
    Overflow,
    /// Divisor was zero
    DivisionByZero,
    /// Conversion would drop a fractional part or a sign
    Inexact,
    /// Operand outside the domain of the operation (e.g. sqrt of a negative)
    Domain(&'static str),
    /// Literal could not be parsed
    Parse(String),
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::Overflow => write!(f, "arithmetic overflow"),
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::Inexact => write!(f, "conversion is not exact"),
            ArithmeticError::Domain(op) => write!(f, "argument outside the domain of {}", op),
            ArithmeticError::Parse(msg) => write!(f, "invalid number literal: {}", msg),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type for checked arithmetic
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
