//! Integration tests for adapters_reporting
//!
//! Renders reports from real solver and catalog runs.

use adapters_reporting::{write_sqrt_report, write_suite_report};
use entities_numerics::U1024;
use infrastructure_series_catalog::{MathConstants, SeriesSuite};
use usecases_sqrt::compare;

fn render_sqrt(number: U1024) -> String {
    let comparison = compare(number).unwrap();
    let mut out = Vec::<u8>::new();
    write_sqrt_report(&mut out, &comparison).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_sqrt_report_from_comparison() {
    let text = render_sqrt(U1024::from_u64(1 << 40).unwrap());
    assert!(text.starts_with("Your number : 1099511627776\nYour number in hex : 0x10000000000\n"));
    assert!(text.contains("Square root by library floor_sqrt : 1048576\n"));
    assert!(text.contains("Square root by babylonian in hex : 0x100000\n"));
    assert!(text.contains(" iterations)\n"));
    assert!(text.ends_with("Did both above report the same sqrt? : YES\n"));
}

#[test]
fn test_sqrt_report_for_zero() {
    let text = render_sqrt(U1024::zero());
    assert!(text.contains("Square root by babylonian : 0\n"));
    assert!(text.contains("(0 iterations)"));
    assert!(text.ends_with("YES\n"));
}

#[test]
fn test_suite_report_layout() {
    let constants = MathConstants::new().unwrap();
    let suite = SeriesSuite::standard(&constants, 99).unwrap();
    let reports = suite.run();
    let mut out = Vec::<u8>::new();
    write_suite_report(&mut out, &reports, 99).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("MAXIMUM EXPANSION OF SERIES WILL BE 99 "));
    assert!(text.contains("1. Taylor expansion of sin(pi/4)\n"));
    assert!(text.contains("9. Approximation of e\n"));
    assert_eq!(text.matches("Total terms expanded before convergence").count(), 6);
    assert_eq!(
        text.matches("Expansion did not converge, series expansion limit 99 reached")
            .count(),
        3
    );
    assert!(!text.contains("Expansion failed"));
    assert!(text.contains(
        "\tReference value          : 0.70710678118654752440084436210484903928483593768847\n"
    ));
}
