//! Frameworks Layer: Numerical Laboratory Driver
//!
//! The outermost layer: parses the command line, sets up logging and runs
//! one of the two experiments.
//!
//! - `numlab sqrt` draws (or reads) a wide unsigned integer and compares the
//!   library square root against the Babylonian iteration
//! - `numlab series` runs the standard Maclaurin suite and reports how close
//!   each expansion came to its reference value
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: clap argument definitions
//! - **[`config`](config/index.html)**: validated [`LabConfig`]
//! - **[`logging`](logging/index.html)**: `tracing-subscriber` setup
//! - **[`runner`](runner/index.html)**: the two runs
//! - **[`error`](error/index.html)**: [`LabError`]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

pub use args::{LabArgs, LabCommand, SeriesArgs, SqrtArgs, Width};
pub use config::{LabConfig, SeriesConfig, SqrtConfig, Task};
pub use error::{LabError, LabResult};
pub use logging::init_logging;
pub use runner::{run_series, run_sqrt, SeriesOutcome, SqrtOutcome};
