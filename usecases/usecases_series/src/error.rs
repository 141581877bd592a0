//! Series Error Module

use entities_numerics::ArithmeticError;

/// Failure of a series expansion
///
/// Hitting the term ceiling is not an error; see
/// [`Termination::CeilingReached`](crate::engine::Termination::CeilingReached).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// `term_stop` must be strictly greater than `term_start`
    InvalidBounds {
        /// Inclusive first term index
        start: u32,
        /// Exclusive ceiling
        stop: u32,
    },
    /// Generating or accumulating the term at `index` failed
    Term {
        /// Index of the failing term
        index: u32,
        /// Underlying arithmetic failure
        source: ArithmeticError,
    },
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::InvalidBounds { start, stop } => write!(
                f,
                "invalid term bounds: stop ({}) must be greater than start ({})",
                stop, start
            ),
            SeriesError::Term { index, source } => {
                write!(f, "term {} failed: {}", index, source)
            }
        }
    }
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::Term { source, .. } => Some(source),
            SeriesError::InvalidBounds { .. } => None,
        }
    }
}

/// Result type for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let bounds = SeriesError::InvalidBounds { start: 5, stop: 5 };
        assert_eq!(
            bounds.to_string(),
            "invalid term bounds: stop (5) must be greater than start (5)"
        );
        assert!(bounds.source().is_none());

        let term = SeriesError::Term {
            index: 3,
            source: ArithmeticError::DivisionByZero,
        };
        assert_eq!(term.to_string(), "term 3 failed: division by zero");
        assert!(term.source().is_some());
    }
}
