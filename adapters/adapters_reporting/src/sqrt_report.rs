//! Square Root Report Module

use std::io::{self, Write};

use entities_numerics::CheckedUint;
use usecases_sqrt::{SqrtComparison, SqrtMeasurement};

fn write_value<W: Write, const BITS: u64>(
    out: &mut W,
    label: &str,
    value: &CheckedUint<BITS>,
) -> io::Result<()> {
    writeln!(out, "{} : {}", label, value)?;
    writeln!(out, "{} in hex : {}", label, value.to_hex_string())
}

fn write_measurement<W: Write, const BITS: u64>(
    out: &mut W,
    solver: &str,
    measurement: &SqrtMeasurement<BITS>,
) -> io::Result<()> {
    writeln!(out)?;
    write_value(out, &format!("Square root by {}", solver), &measurement.root)?;
    match measurement.iterations {
        Some(iterations) => writeln!(
            out,
            "Computation took : {}us ({} iterations)",
            measurement.elapsed_micros, iterations
        ),
        None => writeln!(out, "Computation took : {}us", measurement.elapsed_micros),
    }
}

/// Both roots with timings, then the agreement line
pub fn write_sqrt_report<W: Write, const BITS: u64>(
    out: &mut W,
    comparison: &SqrtComparison<BITS>,
) -> io::Result<()> {
    write_value(out, "Your number", &comparison.number)?;
    write_measurement(out, "library floor_sqrt", &comparison.library)?;
    write_measurement(out, "babylonian", &comparison.babylonian)?;
    writeln!(out)?;
    writeln!(
        out,
        "Did both above report the same sqrt? : {}",
        if comparison.roots_agree() { "YES" } else { "NO" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numerics::U1024;

    fn measurement(root: u64, micros: u64, iterations: Option<u64>) -> SqrtMeasurement<1024> {
        SqrtMeasurement {
            root: U1024::from_u64(root).unwrap(),
            elapsed_micros: micros,
            iterations,
        }
    }

    fn render(comparison: &SqrtComparison<1024>) -> String {
        let mut out = Vec::new();
        write_sqrt_report(&mut out, comparison).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_agreeing_report() {
        let comparison = SqrtComparison {
            number: U1024::from_u64(300).unwrap(),
            library: measurement(17, 3, None),
            babylonian: measurement(17, 5, Some(6)),
        };
        let expected = "\
Your number : 300
Your number in hex : 0x12c

Square root by library floor_sqrt : 17
Square root by library floor_sqrt in hex : 0x11
Computation took : 3us

Square root by babylonian : 17
Square root by babylonian in hex : 0x11
Computation took : 5us (6 iterations)

Did both above report the same sqrt? : YES
";
        assert_eq!(render(&comparison), expected);
    }

    #[test]
    fn test_disagreeing_report() {
        let comparison = SqrtComparison {
            number: U1024::from_u64(300).unwrap(),
            library: measurement(17, 0, None),
            babylonian: measurement(18, 0, Some(1)),
        };
        assert!(render(&comparison).ends_with("same sqrt? : NO\n"));
    }
}
