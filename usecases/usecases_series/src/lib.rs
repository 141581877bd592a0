//! Use Cases Layer: Series Expansion
//!
//! Provides the bounded-or-convergent summation engine. A caller supplies a
//! pure term generator and a term range; the engine accumulates terms until
//! two successive partial sums are identical or the term ceiling is reached,
//! and reports which of the two happened.
//!
//! ## Modules
//!
//! - **[`engine`](engine/index.html)**: [`SeriesEngine`], accumulation modes and
//!   termination reasons
//! - **[`convergence`](convergence/index.html)**: exact-equality convergence check
//! - **[`history`](history/index.html)**: ordered record of partial sums
//! - **[`error`](error/index.html)**: [`SeriesError`]
//!
//! ## See Also
//!
//! - [`entities_numerics`](../../entities/entities_numerics/index.html): Value types
//!   implementing [`Accumulable`](entities_numerics::Accumulable)

pub mod convergence;
pub mod engine;
pub mod error;
pub mod history;

pub use convergence::ConvergenceDetector;
pub use engine::{AccumulationMode, Expansion, SeriesEngine, Termination};
pub use error::{SeriesError, SeriesResult};
pub use history::ConvergenceHistory;
