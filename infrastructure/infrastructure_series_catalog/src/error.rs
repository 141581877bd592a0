//! Catalog Error Module

use entities_numerics::ArithmeticError;
use usecases_series::SeriesError;

/// Failure while building or running a catalog series
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Building a constant, argument or table failed
    Arithmetic(ArithmeticError),
    /// The expansion itself failed
    Series(SeriesError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Arithmetic(e) => write!(f, "catalog arithmetic failed: {}", e),
            CatalogError::Series(e) => write!(f, "series expansion failed: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Arithmetic(e) => Some(e),
            CatalogError::Series(e) => Some(e),
        }
    }
}

impl From<ArithmeticError> for CatalogError {
    fn from(e: ArithmeticError) -> Self {
        CatalogError::Arithmetic(e)
    }
}

impl From<SeriesError> for CatalogError {
    fn from(e: SeriesError) -> Self {
        CatalogError::Series(e)
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
