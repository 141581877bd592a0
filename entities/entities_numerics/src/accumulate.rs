//! Accumulation Trait Module
//!
//! The minimal arithmetic a series result type needs: a zero built from a
//! small integer, and checked addition and subtraction of one term.

use crate::checked_uint::CheckedUint;
use crate::decimal::BigDecimal;
use crate::error::{ArithmeticError, ArithmeticResult};

/// Value type a series can be summed in
///
/// Implementations must be pure: the same inputs always give the same output
/// and equality must be exact, since convergence is detected by two equal
/// successive partial sums.
pub trait Accumulable: Clone + PartialEq + std::fmt::Display {
    /// Build a value from a small integer
    fn from_small(value: i32) -> ArithmeticResult<Self>;

    /// self + term
    fn add_term(&self, term: &Self) -> ArithmeticResult<Self>;

    /// self - term
    fn sub_term(&self, term: &Self) -> ArithmeticResult<Self>;
}

impl<const DIGITS: u32> Accumulable for BigDecimal<DIGITS> {
    fn from_small(value: i32) -> ArithmeticResult<Self> {
        Self::from_i64(i64::from(value))
    }

    fn add_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_add(term)
    }

    fn sub_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_sub(term)
    }
}

impl<const BITS: u64> Accumulable for CheckedUint<BITS> {
    fn from_small(value: i32) -> ArithmeticResult<Self> {
        let value = u64::try_from(value).map_err(|_| ArithmeticError::Overflow)?;
        Self::from_u64(value)
    }

    fn add_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_add(term)
    }

    fn sub_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_sub(term)
    }
}

impl Accumulable for i64 {
    fn from_small(value: i32) -> ArithmeticResult<Self> {
        Ok(i64::from(value))
    }

    fn add_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_add(*term).ok_or(ArithmeticError::Overflow)
    }

    fn sub_term(&self, term: &Self) -> ArithmeticResult<Self> {
        self.checked_sub(*term).ok_or(ArithmeticError::Overflow)
    }
}

/// Finite inputs producing a non-finite sum are reported as overflow
impl Accumulable for f64 {
    fn from_small(value: i32) -> ArithmeticResult<Self> {
        Ok(f64::from(value))
    }

    fn add_term(&self, term: &Self) -> ArithmeticResult<Self> {
        finite(*self + *term, *self, *term)
    }

    fn sub_term(&self, term: &Self) -> ArithmeticResult<Self> {
        finite(*self - *term, *self, *term)
    }
}

fn finite(result: f64, a: f64, b: f64) -> ArithmeticResult<f64> {
    if !result.is_finite() && a.is_finite() && b.is_finite() {
        return Err(ArithmeticError::Overflow);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checked_uint::U1024;
    use crate::decimal::Decimal50;

    #[test]
    fn test_decimal_accumulation() {
        let zero = Decimal50::from_small(0).unwrap();
        let half: Decimal50 = "0.5".parse().unwrap();
        let sum = zero.add_term(&half).unwrap().add_term(&half).unwrap();
        assert_eq!(sum, Decimal50::one());
        assert_eq!(sum.sub_term(&half).unwrap(), half);
    }

    #[test]
    fn test_uint_accumulation() {
        assert_eq!(U1024::from_small(-1), Err(ArithmeticError::Overflow));
        let one = U1024::from_small(1).unwrap();
        assert_eq!(U1024::max_value().add_term(&one), Err(ArithmeticError::Overflow));
        assert_eq!(U1024::zero().sub_term(&one), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_i64_accumulation() {
        assert_eq!(i64::MAX.add_term(&1), Err(ArithmeticError::Overflow));
        assert_eq!(i64::MIN.sub_term(&1), Err(ArithmeticError::Overflow));
        assert_eq!(5i64.sub_term(&7), Ok(-2));
    }

    #[test]
    fn test_f64_accumulation() {
        assert_eq!(f64::MAX.add_term(&f64::MAX), Err(ArithmeticError::Overflow));
        assert_eq!(1.5f64.add_term(&2.0), Ok(3.5));
    }
}
