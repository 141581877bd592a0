//! Driver Error Module

use adapters_number_source::SourceError;
use entities_numerics::ArithmeticError;
use infrastructure_series_catalog::CatalogError;

/// Anything that stops a driver run
#[derive(Debug)]
pub enum LabError {
    /// Invalid combination of arguments
    Config(String),
    /// The log filter could not be parsed or installed
    Logging(String),
    /// Obtaining the input number failed
    Source(SourceError),
    /// A solver step failed
    Arithmetic(ArithmeticError),
    /// Building the series suite failed
    Catalog(CatalogError),
    /// Writing the report failed
    Io(std::io::Error),
}

impl std::fmt::Display for LabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabError::Config(msg) => write!(f, "configuration error: {}", msg),
            LabError::Logging(msg) => write!(f, "logging setup failed: {}", msg),
            LabError::Source(e) => write!(f, "could not obtain a number: {}", e),
            LabError::Arithmetic(e) => write!(f, "square root failed: {}", e),
            LabError::Catalog(e) => write!(f, "series suite failed: {}", e),
            LabError::Io(e) => write!(f, "could not write report: {}", e),
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabError::Source(e) => Some(e),
            LabError::Arithmetic(e) => Some(e),
            LabError::Catalog(e) => Some(e),
            LabError::Io(e) => Some(e),
            LabError::Config(_) | LabError::Logging(_) => None,
        }
    }
}

impl From<SourceError> for LabError {
    fn from(e: SourceError) -> Self {
        LabError::Source(e)
    }
}

impl From<ArithmeticError> for LabError {
    fn from(e: ArithmeticError) -> Self {
        LabError::Arithmetic(e)
    }
}

impl From<CatalogError> for LabError {
    fn from(e: CatalogError) -> Self {
        LabError::Catalog(e)
    }
}

impl From<std::io::Error> for LabError {
    fn from(e: std::io::Error) -> Self {
        LabError::Io(e)
    }
}

/// Result type for driver operations
pub type LabResult<T> = Result<T, LabError>;
