//! Numerical Laboratory Binary Entry Point
//!
//! Parses arguments, installs logging, runs the selected experiment and maps
//! any failure to a message on stderr and exit status 1. A solver mismatch is
//! reported but does not change the exit status.

use std::io;
use std::process;

use clap::Parser;
use frameworks_numlab::{init_logging, run_series, run_sqrt, LabArgs, LabConfig, Task};
use tracing::warn;

fn main() {
    let args = LabArgs::parse();

    let config = match LabConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(config.log_level.as_deref()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &config.task {
        Task::Sqrt(sqrt) => run_sqrt(sqrt, io::stdin().lock(), &mut out).map(|outcome| {
            if !outcome.roots_agree {
                warn!(bits = outcome.bits, "square root solvers disagreed");
            }
        }),
        Task::Series(series) => run_series(series, &mut out).map(|outcome| {
            if outcome.failed > 0 {
                warn!(failed = outcome.failed, "some series could not be expanded");
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
