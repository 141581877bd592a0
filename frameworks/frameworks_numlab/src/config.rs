//! Configuration Module
//!
//! Validated run configuration built from the command line. Runners only
//! ever see a [`LabConfig`], never raw arguments.

use crate::args::{LabArgs, LabCommand, Width};
use crate::error::{LabError, LabResult};

/// Configuration of a square root comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtConfig {
    /// Literal to use instead of prompting or drawing
    pub number: Option<String>,
    /// Bit width of the checked integer
    pub width: Width,
    /// Ask on stdin before falling back to a random draw
    pub interactive: bool,
}

/// Configuration of a series suite run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Term ceiling for every series
    pub max_terms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Sqrt(SqrtConfig),
    Series(SeriesConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabConfig {
    /// Log filter directive; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,
    pub task: Task,
}

impl LabConfig {
    pub fn from_args(args: LabArgs) -> LabResult<Self> {
        let task = match args.command {
            LabCommand::Sqrt(sqrt) => {
                if sqrt.number.is_some() && sqrt.interactive {
                    return Err(LabError::Config(
                        "--number and --interactive cannot be combined".to_string(),
                    ));
                }
                Task::Sqrt(SqrtConfig {
                    number: sqrt.number,
                    width: sqrt.width,
                    interactive: sqrt.interactive,
                })
            }
            LabCommand::Series(series) => {
                if series.max_terms == 0 {
                    return Err(LabError::Config("--max-terms must be at least 1".to_string()));
                }
                Task::Series(SeriesConfig {
                    max_terms: series.max_terms,
                })
            }
        };
        Ok(Self {
            log_level: args.log_level,
            task,
        })
    }
}
