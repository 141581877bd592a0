//! Use Cases Layer: Square Root Solvers
//!
//! Computes `floor(sqrt(n))` of a wide unsigned integer two independent ways
//! and times each one:
//!
//! - the library primitive (`malachite`'s `FloorSqrt`)
//! - the Babylonian (Heron) iteration under checked arithmetic
//!
//! The two roots must agree. A disagreement is a defect in one of the solvers
//! and is surfaced as a [`SolverMismatch`] value rather than a panic.
//!
//! ## Modules
//!
//! - **[`solvers`](solvers/index.html)**: the two solvers and their timed variants
//! - **[`comparison`](comparison/index.html)**: running both and checking agreement
//!
//! ## See Also
//!
//! - [`entities_numerics`](../../entities/entities_numerics/index.html): `CheckedUint`
//! - [`adapters_time_management`](../../adapters/adapters_time_management/index.html): Stopwatch

pub mod comparison;
pub mod solvers;

pub use comparison::{compare, SolverMismatch, SqrtComparison};
pub use solvers::{
    babylonian_sqrt, library_sqrt, timed_babylonian_sqrt, timed_library_sqrt, BabylonianRoot,
    SqrtMeasurement,
};
