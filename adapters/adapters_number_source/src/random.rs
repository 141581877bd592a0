//! Random Number Source Module
//!
//! Draws values uniformly from `[2^1000, max_value()]` of the requested
//! width. Candidates are full-width random words; anything below the lower
//! bound is redrawn, which keeps the distribution uniform over the range.

use entities_numerics::CheckedUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::SourceResult;
use crate::NumberSource;

/// Exponent of the smallest value drawn
pub const LOWER_BOUND_EXPONENT: u64 = 1000;

/// Uniform random wide integers
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSource<R> {
    /// Draw from a caller-supplied generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// One uniform draw from `[2^1000, CheckedUint::<BITS>::max_value()]`
    ///
    /// Fails with `Overflow` when `BITS` is too narrow to hold the lower bound.
    pub fn draw<const BITS: u64>(&mut self) -> SourceResult<CheckedUint<BITS>> {
        let lower = CheckedUint::<BITS>::power_of_two(LOWER_BOUND_EXPONENT)?;
        let word_count = ((BITS + 63) / 64) as usize;
        let spare_bits = word_count as u64 * 64 - BITS;
        let mut words = vec![0u64; word_count];
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            self.rng.fill(&mut words[..]);
            if let Some(top) = words.last_mut() {
                *top >>= spare_bits;
            }
            let candidate = CheckedUint::<BITS>::from_u64_words(&words)?;
            if candidate >= lower {
                trace!(attempts, bits = BITS, "drew random number");
                return Ok(candidate);
            }
        }
    }
}

impl<R: Rng> NumberSource for RandomSource<R> {
    fn next_number<const BITS: u64>(&mut self) -> SourceResult<CheckedUint<BITS>> {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numerics::{ArithmeticError, U1024, U2048};
    use crate::error::SourceError;

    #[test]
    fn test_draws_stay_in_range() {
        let mut source = RandomSource::seeded(7);
        let lower = U1024::power_of_two(LOWER_BOUND_EXPONENT).unwrap();
        for _ in 0..50 {
            let n: U1024 = source.draw().unwrap();
            assert!(n >= lower);
            assert!(n.bits() <= 1024);
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a: U2048 = RandomSource::seeded(42).draw().unwrap();
        let b: U2048 = RandomSource::seeded(42).draw().unwrap();
        assert_eq!(a, b);
        let c: U2048 = RandomSource::seeded(43).draw().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_with_rng_matches_seeded() {
        let mut supplied = RandomSource::with_rng(StdRng::seed_from_u64(42));
        let mut seeded = RandomSource::seeded(42);
        for _ in 0..3 {
            let a: U1024 = supplied.draw().unwrap();
            let b: U1024 = seeded.draw().unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_uneven_width() {
        let mut source = RandomSource::seeded(1);
        for _ in 0..20 {
            let n: CheckedUint<1001> = source.draw().unwrap();
            assert_eq!(n.bits(), 1001);
        }
    }

    #[test]
    fn test_width_below_lower_bound() {
        let mut source = RandomSource::seeded(1);
        let result = source.draw::<512>();
        assert!(matches!(
            result,
            Err(SourceError::Number(ArithmeticError::Overflow))
        ));
    }
}
