//! Runner Module
//!
//! Wires sources, use cases and reports together for each subcommand. The
//! runners take their input and output streams as parameters so they can be
//! driven from tests as well as from `main`.

use std::io::{BufRead, Write};

use adapters_number_source::{NumberSource, PromptSource, RandomSource, SourceError};
use adapters_reporting::{write_sqrt_report, write_suite_report};
use entities_numerics::CheckedUint;
use infrastructure_series_catalog::{MathConstants, SeriesSuite};
use tracing::info;
use usecases_sqrt::compare;

use crate::args::Width;
use crate::config::{SeriesConfig, SqrtConfig};
use crate::error::LabResult;

/// What a square root run found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqrtOutcome {
    /// Width the number was handled at
    pub bits: u64,
    /// Both solvers returned the same root
    pub roots_agree: bool,
}

/// What a series run found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOutcome {
    /// Series run
    pub series: usize,
    /// Series that stopped on two equal partial sums
    pub converged: usize,
    /// Series whose expansion returned an error
    pub failed: usize,
}

/// Obtain a number, compare both solvers on it and write the report
///
/// `input` is only read in interactive mode.
pub fn run_sqrt<R: BufRead, W: Write>(
    config: &SqrtConfig,
    input: R,
    out: &mut W,
) -> LabResult<SqrtOutcome> {
    match config.width {
        Width::Bits1024 => run_sqrt_with_width::<R, W, 1024>(config, input, out),
        Width::Bits2048 => run_sqrt_with_width::<R, W, 2048>(config, input, out),
    }
}

fn run_sqrt_with_width<R: BufRead, W: Write, const BITS: u64>(
    config: &SqrtConfig,
    input: R,
    out: &mut W,
) -> LabResult<SqrtOutcome> {
    let number: CheckedUint<BITS> = match (&config.number, config.interactive) {
        (Some(literal), _) => literal.parse().map_err(SourceError::Number)?,
        (None, true) => PromptSource::new(input, &mut *out, RandomSource::new()).next_number()?,
        (None, false) => RandomSource::new().next_number()?,
    };
    info!(bits = BITS, number = %number, "comparing square root solvers");

    let comparison = compare(number)?;
    write_sqrt_report(out, &comparison)?;
    Ok(SqrtOutcome {
        bits: BITS,
        roots_agree: comparison.roots_agree(),
    })
}

/// Run the standard series suite and write the report
pub fn run_series<W: Write>(config: &SeriesConfig, out: &mut W) -> LabResult<SeriesOutcome> {
    let constants = MathConstants::new()?;
    let suite = SeriesSuite::standard(&constants, config.max_terms)?;
    let reports = suite.run();
    write_suite_report(out, &reports, config.max_terms)?;

    let converged = reports
        .iter()
        .filter(|r| matches!(&r.outcome, Ok(a) if a.expansion.is_converged()))
        .count();
    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    Ok(SeriesOutcome {
        series: reports.len(),
        converged,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Cursor};

    fn sqrt_config(number: Option<&str>, width: Width, interactive: bool) -> SqrtConfig {
        SqrtConfig {
            number: number.map(str::to_string),
            width,
            interactive,
        }
    }

    #[test]
    fn test_sqrt_with_literal() {
        let mut out = Vec::new();
        let config = sqrt_config(Some("1000000"), Width::Bits1024, false);
        let outcome = run_sqrt(&config, empty(), &mut out).unwrap();
        assert_eq!(outcome, SqrtOutcome { bits: 1024, roots_agree: true });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Square root by babylonian : 1000\n"));
        assert!(text.contains("Square root by babylonian in hex : 0x3e8\n"));
    }

    #[test]
    fn test_sqrt_literal_too_wide() {
        let literal = format!("0x1{}", "0".repeat(256));
        let config = sqrt_config(Some(&literal), Width::Bits1024, false);
        let err = run_sqrt(&config, empty(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not obtain a number: invalid number: arithmetic overflow"
        );

        let config = sqrt_config(Some(&literal), Width::Bits2048, false);
        assert!(run_sqrt(&config, empty(), &mut Vec::<u8>::new()).is_ok());
    }

    #[test]
    fn test_sqrt_random_draw() {
        let mut out = Vec::<u8>::new();
        let config = sqrt_config(None, Width::Bits2048, false);
        let outcome = run_sqrt(&config, empty(), &mut out).unwrap();
        assert!(outcome.roots_agree);
        assert_eq!(outcome.bits, 2048);
    }

    #[test]
    fn test_sqrt_interactive() {
        let mut out = Vec::new();
        let config = sqrt_config(None, Width::Bits1024, true);
        let input = Cursor::new(b"y\n144\n".to_vec());
        let outcome = run_sqrt(&config, input, &mut out).unwrap();
        assert!(outcome.roots_agree);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Would you like to enter 1024 bit number yourself?\n"));
        assert!(text.contains("Your number : 144\n"));
        assert!(text.contains("Square root by library floor_sqrt : 12\n"));
    }

    #[test]
    fn test_series_run() {
        let mut out = Vec::new();
        let outcome = run_series(&SeriesConfig { max_terms: 5 }, &mut out).unwrap();
        assert_eq!(
            outcome,
            SeriesOutcome {
                series: 9,
                converged: 0,
                failed: 0
            }
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("MAXIMUM EXPANSION OF SERIES WILL BE 5 "));
        assert!(text.contains("9. Approximation of e\n"));
    }
}
