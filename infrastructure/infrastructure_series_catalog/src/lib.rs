//! Infrastructure Layer: Series Catalog
//!
//! The concrete series the laboratory evaluates: term generators for a set of
//! Maclaurin expansions, exact Bernoulli numbers for the tangent series, the
//! reference constants they are judged against, and a suite that runs them
//! all through [`SeriesEngine`](usecases_series::SeriesEngine).
//!
//! ## Modules
//!
//! - **[`constants`](constants/index.html)**: [`MathConstants`]
//! - **[`bernoulli`](bernoulli/index.html)**: [`BernoulliTable`]
//! - **[`maclaurin`](maclaurin/index.html)**: [`Maclaurin`] term generators
//! - **[`suite`](suite/index.html)**: [`SeriesSuite`] and its reports
//! - **[`error`](error/index.html)**: [`CatalogError`]

pub mod bernoulli;
pub mod constants;
pub mod error;
pub mod maclaurin;
pub mod suite;

pub use bernoulli::BernoulliTable;
pub use constants::MathConstants;
pub use error::{CatalogError, CatalogResult};
pub use maclaurin::{factorial, Maclaurin, FACTORIAL_LIMIT};
pub use suite::{
    Approximation, SeriesDefinition, SeriesReport, SeriesSuite, DEFAULT_MAX_TERMS,
    GEOMETRIC_ARGUMENT,
};
