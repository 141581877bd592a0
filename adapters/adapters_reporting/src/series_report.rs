//! Series Report Module
//!
//! One block per series: how it terminated, the approximation, the reference
//! and their absolute difference, all in fixed notation.

use std::io::{self, Write};

use infrastructure_series_catalog::SeriesReport;
use usecases_series::Termination;

/// Digits after the decimal point in series reports
pub const REPORT_PLACES: usize = 50;

/// A single series block
pub fn write_series_report<W: Write>(
    out: &mut W,
    report: &SeriesReport,
    max_terms: u32,
) -> io::Result<()> {
    writeln!(out, "{}. {}", report.number, report.title)?;
    let approximation = match &report.outcome {
        Ok(approximation) => approximation,
        Err(e) => {
            writeln!(out, "\tExpansion failed : {}", e)?;
            return writeln!(out);
        }
    };
    let expansion = &approximation.expansion;

    match expansion.termination {
        Termination::Converged => writeln!(
            out,
            "\tTotal terms expanded before convergence : {}",
            expansion.terms_evaluated()
        )?,
        Termination::CeilingReached => writeln!(
            out,
            "\tExpansion did not converge, series expansion limit {} reached",
            max_terms
        )?,
    }
    writeln!(
        out,
        "\tExpansion resulted value : {}",
        expansion.value.to_fixed(REPORT_PLACES)
    )?;
    writeln!(
        out,
        "\tReference value          : {}",
        report.reference.to_fixed(REPORT_PLACES)
    )?;
    writeln!(
        out,
        "\tDifference of expansions : {}",
        approximation.difference.to_fixed(REPORT_PLACES)
    )?;
    writeln!(out)
}

/// Banner followed by every series block
pub fn write_suite_report<W: Write>(
    out: &mut W,
    reports: &[SeriesReport],
    max_terms: u32,
) -> io::Result<()> {
    writeln!(out, "******************** STARTED EXPANSION SUITE ********************")?;
    writeln!(
        out,
        "*********** MAXIMUM EXPANSION OF SERIES WILL BE {} ***********",
        max_terms
    )?;
    writeln!(out)?;
    for report in reports {
        write_series_report(out, report, max_terms)?;
    }
    Ok(())
}
