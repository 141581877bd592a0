//! Number Source Error Module

use entities_numerics::ArithmeticError;

/// Failure to obtain an input number
#[derive(Debug)]
pub enum SourceError {
    /// Reading the answer or writing the prompt failed
    Io(std::io::Error),
    /// Input ended while a number was expected
    UnexpectedEof,
    /// The entered literal or the sampling range was not representable
    Number(ArithmeticError),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "input/output error: {}", e),
            SourceError::UnexpectedEof => write!(f, "input ended before a number was entered"),
            SourceError::Number(e) => write!(f, "invalid number: {}", e),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            SourceError::Number(e) => Some(e),
            SourceError::UnexpectedEof => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

impl From<ArithmeticError> for SourceError {
    fn from(e: ArithmeticError) -> Self {
        SourceError::Number(e)
    }
}

/// Result type for number sources
pub type SourceResult<T> = Result<T, SourceError>;
