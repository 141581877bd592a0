//! Adapters Layer: Time Management
//!
//! Provides the timing collaborator used to instrument the solvers. Timing is
//! observational only: nothing in the core branches on elapsed time.
//!
//! ## Modules
//!
//! - **[`stopwatch`](stopwatch/index.html)**: Stopwatch started on creation,
//!   reporting elapsed microseconds
//!
//! ## See Also
//!
//! - [`usecases_sqrt`](../../usecases/usecases_sqrt/index.html): Timed square root solvers

pub mod stopwatch;

pub use stopwatch::{measure, ElapsedMicros, Stopwatch};
