//! Integration tests for infrastructure_series_catalog crate
//!
//! These tests run the standard suite end-to-end and check each
//! approximation against its reference value.

use entities_numerics::{ArithmeticError, Decimal50};
use infrastructure_series_catalog::*;
use usecases_series::{SeriesError, SeriesEngine, Termination};

fn dec(s: &str) -> Decimal50 {
    s.parse().unwrap()
}

fn run_standard(max_terms: u32) -> Vec<SeriesReport> {
    let constants = MathConstants::new().unwrap();
    SeriesSuite::standard(&constants, max_terms).unwrap().run()
}

fn approximation(reports: &[SeriesReport], number: usize) -> &Approximation {
    reports[number - 1].outcome.as_ref().unwrap()
}

#[test]
fn test_standard_suite_at_default_ceiling() {
    let reports = run_standard(DEFAULT_MAX_TERMS);
    assert_eq!(reports.len(), 9);

    // sin, cos, cosh, asinh, binomial, e converge well inside 99 terms
    for number in [1, 2, 4, 5, 8, 9] {
        let approximation = approximation(&reports, number);
        assert_eq!(
            approximation.expansion.termination,
            Termination::Converged,
            "{}",
            reports[number - 1].title
        );
        assert!(
            approximation.difference < dec("1e-47"),
            "{}: {}",
            reports[number - 1].title,
            approximation.difference
        );
    }

    // tan(pi/3) and ln(1.46) are cut off at the ceiling but already close
    let tan = approximation(&reports, 3);
    assert_eq!(tan.expansion.termination, Termination::CeilingReached);
    assert_eq!(tan.expansion.terms_evaluated(), 99);
    assert!(tan.difference < dec("1e-33"));
    assert!(tan.difference > dec("1e-40"));

    let ln = approximation(&reports, 6);
    assert_eq!(ln.expansion.termination, Termination::CeilingReached);
    assert!(ln.difference < dec("1e-35"));

    // The geometric series needs several hundred terms at this argument
    let geometric = approximation(&reports, 7);
    assert_eq!(geometric.expansion.termination, Termination::CeilingReached);
    assert!(geometric.difference < dec("1e-12"));
    assert!(geometric.difference > dec("1e-14"));
}

#[test]
fn test_geometric_series_converges_with_room() {
    let x: Decimal50 = GEOMETRIC_ARGUMENT.parse().unwrap();
    let series = Maclaurin::Geometric { x: x.clone() };
    let engine = SeriesEngine::new(0, 999).unwrap();
    let expansion = engine.expand_by_adding(|n: u32| series.term(n)).unwrap();
    assert!(expansion.is_converged());

    let reference = Decimal50::one()
        .checked_div(&Decimal50::one().checked_sub(&x).unwrap())
        .unwrap();
    let difference = expansion.value.checked_sub(&reference).unwrap().abs();
    assert!(difference < dec("1e-48"));
}

#[test]
fn test_raised_ceiling_lets_slow_series_converge() {
    let reports = run_standard(200);
    for number in [3, 6] {
        let approximation = approximation(&reports, number);
        assert!(approximation.expansion.is_converged(), "{}", reports[number - 1].title);
        assert!(approximation.difference < dec("1e-47"));
    }
}

#[test]
fn test_factorial_overflow_aborts_expansion() {
    // 100^k / k! is still far from negligible when k! leaves 2048 bits
    let series = Maclaurin::Sine { x: dec("100") };
    let engine = SeriesEngine::with_max_terms(400).unwrap();
    let err = engine.expand_by_adding(|n: u32| series.term(n)).unwrap_err();
    assert_eq!(
        err,
        SeriesError::Term {
            index: 150,
            source: ArithmeticError::Overflow,
        }
    );
}

#[test]
fn test_suite_is_repeatable() {
    let constants = MathConstants::new().unwrap();
    let suite = SeriesSuite::standard(&constants, 40).unwrap();
    assert_eq!(suite.run(), suite.run());
}
