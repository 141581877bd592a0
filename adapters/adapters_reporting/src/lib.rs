//! Adapters Layer: Reporting
//!
//! Renders results as plain text on any `std::io::Write`. Nothing here
//! computes; every figure comes from the use cases.
//!
//! ## Modules
//!
//! - **[`sqrt_report`](sqrt_report/index.html)**: the two roots in decimal and hex,
//!   their timings and whether they agree
//! - **[`series_report`](series_report/index.html)**: approximation, reference,
//!   difference and termination for each series

pub mod series_report;
pub mod sqrt_report;

pub use series_report::{write_series_report, write_suite_report, REPORT_PLACES};
pub use sqrt_report::write_sqrt_report;
