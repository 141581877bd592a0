//! Solver Comparison Module
//!
//! Runs both solvers on the same input and checks that they agree. Only the
//! roots are compared; timings are informational.

use entities_numerics::{ArithmeticResult, CheckedUint};
use tracing::{debug, warn};

use crate::solvers::{timed_babylonian_sqrt, timed_library_sqrt, SqrtMeasurement};

/// The two solvers returned different roots for the same input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverMismatch {
    /// The input, in decimal
    pub number: String,
    /// Root from the library primitive, in decimal
    pub library_root: String,
    /// Root from the Babylonian iteration, in decimal
    pub babylonian_root: String,
}

impl std::fmt::Display for SolverMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "square root solvers disagree for {}: library {} vs babylonian {}",
            self.number, self.library_root, self.babylonian_root
        )
    }
}

impl std::error::Error for SolverMismatch {}

/// Both measurements for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtComparison<const BITS: u64> {
    /// The input both solvers ran on
    pub number: CheckedUint<BITS>,
    /// Result of [`library_sqrt`](crate::library_sqrt)
    pub library: SqrtMeasurement<BITS>,
    /// Result of [`babylonian_sqrt`](crate::babylonian_sqrt)
    pub babylonian: SqrtMeasurement<BITS>,
}

impl<const BITS: u64> SqrtComparison<BITS> {
    /// Check if both solvers produced the same root
    pub fn roots_agree(&self) -> bool {
        self.library.root == self.babylonian.root
    }

    /// The agreed root, or the mismatch
    pub fn verify(&self) -> Result<&CheckedUint<BITS>, SolverMismatch> {
        if self.roots_agree() {
            return Ok(&self.library.root);
        }
        Err(SolverMismatch {
            number: self.number.to_string(),
            library_root: self.library.root.to_string(),
            babylonian_root: self.babylonian.root.to_string(),
        })
    }
}

/// Run both solvers on `number`
///
/// A disagreement is logged and left for the caller to act on through
/// [`SqrtComparison::verify`]; only arithmetic failures are errors here.
pub fn compare<const BITS: u64>(number: CheckedUint<BITS>) -> ArithmeticResult<SqrtComparison<BITS>> {
    let library = timed_library_sqrt(&number);
    let babylonian = timed_babylonian_sqrt(&number)?;
    let comparison = SqrtComparison {
        number,
        library,
        babylonian,
    };

    if let Err(mismatch) = comparison.verify() {
        warn!(%mismatch, "solver mismatch");
    } else {
        debug!(
            library_micros = comparison.library.elapsed_micros,
            babylonian_micros = comparison.babylonian.elapsed_micros,
            "solvers agree"
        );
    }
    Ok(comparison)
}
