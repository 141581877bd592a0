//! Series Suite Module
//!
//! The standard set of expansions: each one pairs a [`Maclaurin`] generator
//! with an independently known reference value. Running the suite sums every
//! series with one shared [`SeriesEngine`] and reports how close each
//! approximation came and whether it converged or was cut off at the ceiling.

use entities_numerics::{BigRational, Decimal50};
use tracing::{info, warn};
use usecases_series::{Expansion, SeriesEngine};

use crate::constants::MathConstants;
use crate::error::{CatalogError, CatalogResult};
use crate::maclaurin::Maclaurin;

/// Term ceiling used when none is configured
pub const DEFAULT_MAX_TERMS: u32 = 99;

/// The argument of the geometric series in the suite
pub const GEOMETRIC_ARGUMENT: &str = "0.73245154367542122134";

/// One named series and the value it should approach
#[derive(Debug, Clone)]
pub struct SeriesDefinition {
    /// Position in the suite, counting from 1
    pub number: usize,
    /// Heading shown in reports
    pub title: String,
    /// Term generator
    pub series: Maclaurin,
    /// Known value of the sum, rounded to 50 digits
    pub reference: Decimal50,
}

/// A finished expansion compared against its reference
#[derive(Debug, Clone, PartialEq)]
pub struct Approximation {
    /// Final value, partial sums and termination of the run
    pub expansion: Expansion<Decimal50>,
    /// |approximation - reference|
    pub difference: Decimal50,
}

/// Outcome of one suite entry
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    /// Copied from the [`SeriesDefinition`]
    pub number: usize,
    /// Copied from the [`SeriesDefinition`]
    pub title: String,
    /// Copied from the [`SeriesDefinition`]
    pub reference: Decimal50,
    /// The approximation, or the error that stopped the expansion
    pub outcome: CatalogResult<Approximation>,
}

/// The standard expansions and the engine that runs them
#[derive(Debug, Clone)]
pub struct SeriesSuite {
    engine: SeriesEngine,
    definitions: Vec<SeriesDefinition>,
}

impl SeriesSuite {
    /// Every standard series, summed over `[0, max_terms)`
    pub fn standard(constants: &MathConstants, max_terms: u32) -> CatalogResult<Self> {
        let engine = SeriesEngine::with_max_terms(max_terms)?;
        let third_pi = constants.third_pi()?;
        let five_sixths_pi = Decimal50::from_i64(5)?.checked_mul(&constants.sixth_pi()?)?;

        let entries = vec![
            (
                "Taylor expansion of sin(pi/4)",
                Maclaurin::Sine {
                    x: constants.quarter_pi()?,
                },
                constants.sin_quarter_pi.clone(),
            ),
            (
                "Taylor expansion of cos(pi/6)",
                Maclaurin::Cosine {
                    x: constants.sixth_pi()?,
                },
                constants.cos_sixth_pi.clone(),
            ),
            (
                "Taylor expansion of tan(pi/3)",
                Maclaurin::tangent(third_pi, engine.term_stop())?,
                constants.tan_third_pi.clone(),
            ),
            (
                "Taylor expansion of cosh(5*pi/6)",
                Maclaurin::HyperbolicCosine { x: five_sixths_pi },
                constants.cosh_five_sixths_pi.clone(),
            ),
            (
                "Taylor expansion of asinh(0.3)",
                Maclaurin::InverseHyperbolicSine {
                    x: BigRational::from_fraction(3, 10)?,
                },
                constants.asinh_three_tenths.clone(),
            ),
            (
                "Taylor expansion of ln(1.46)",
                Maclaurin::LogOnePlus {
                    x: BigRational::from_fraction(46, 100)?,
                },
                constants.ln_one_point_four_six.clone(),
            ),
            geometric_entry()?,
            (
                "Maclaurin expansion of (1 + x)^(-1/3) at 0.2",
                Maclaurin::Binomial {
                    x: BigRational::from_fraction(1, 5)?,
                    exponent: BigRational::from_fraction(-1, 3)?,
                },
                constants.inverse_cube_root_six_fifths.clone(),
            ),
            (
                "Approximation of e",
                Maclaurin::Euler,
                constants.e.clone(),
            ),
        ];

        let definitions = entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, series, reference))| SeriesDefinition {
                number: i + 1,
                title: title.to_string(),
                series,
                reference,
            })
            .collect();

        Ok(Self {
            engine,
            definitions,
        })
    }

    pub fn engine(&self) -> &SeriesEngine {
        &self.engine
    }

    pub fn definitions(&self) -> &[SeriesDefinition] {
        &self.definitions
    }

    /// Run a single definition
    pub fn run_one(&self, definition: &SeriesDefinition) -> SeriesReport {
        info!(number = definition.number, title = %definition.title, "expanding series");
        let outcome = self.approximate(definition);
        if let Err(e) = &outcome {
            warn!(number = definition.number, error = %e, "series failed");
        }
        SeriesReport {
            number: definition.number,
            title: definition.title.clone(),
            reference: definition.reference.clone(),
            outcome,
        }
    }

    /// Run every definition in order
    ///
    /// A failing series is recorded in its report and does not stop the rest.
    pub fn run(&self) -> Vec<SeriesReport> {
        let reports: Vec<SeriesReport> = self.definitions.iter().map(|d| self.run_one(d)).collect();
        info!(
            series = reports.len(),
            max_terms = self.engine.max_terms(),
            "suite finished"
        );
        reports
    }

    fn approximate(&self, definition: &SeriesDefinition) -> CatalogResult<Approximation> {
        let expansion = self
            .engine
            .expand_by_adding(|n: u32| definition.series.term(n))?;
        let difference = expansion
            .value
            .checked_sub(&definition.reference)
            .map_err(CatalogError::Arithmetic)?
            .abs();
        Ok(Approximation {
            expansion,
            difference,
        })
    }
}

fn geometric_entry() -> CatalogResult<(&'static str, Maclaurin, Decimal50)> {
    let x: Decimal50 = GEOMETRIC_ARGUMENT.parse()?;
    let reference = Decimal50::one().checked_div(&Decimal50::one().checked_sub(&x)?)?;
    Ok((
        "Maclaurin expansion of 1/(1 - x) at 0.73245154367542122134",
        Maclaurin::Geometric { x },
        reference,
    ))
}
