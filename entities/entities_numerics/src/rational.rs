//! Rational Number Operations Module
//!
//! Provides exact rational arithmetic for quantities that must stay exact
//! until a single final rounding, such as Bernoulli numbers feeding the
//! tangent series.
//!
//! # Implementation Details
//!
//! This module uses the `malachite` crate's `Rational` type. Values are kept
//! as reduced fractions, so equality is structural.
//!
//! # Examples
//!
//! ```rust
//! use entities_numerics::BigRational;
//!
//! let third = BigRational::from_fraction(1, 3).unwrap();
//! let one = third.plus(&third).plus(&third);
//! assert_eq!(one, BigRational::from_i64(1));
//! ```

use malachite::base::num::basic::traits::Zero;
use malachite::{Natural, Rational};

use crate::error::{ArithmeticError, ArithmeticResult};

/// Big rational number representation using malachite's Rational.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigRational {
    value: Rational,
}

impl BigRational {
    /// Create a new rational number from a 64-bit signed integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::BigRational;
    ///
    /// let r = BigRational::from_i64(42);
    /// assert_eq!(r.to_string(), "42");
    /// ```
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Rational::from(value),
        }
    }

    /// Create a rational number from a numerator and denominator.
    ///
    /// # Returns
    ///
    /// * `Ok(BigRational)` if denominator is not zero
    /// * `Err(ArithmeticError::DivisionByZero)` otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numerics::BigRational;
    ///
    /// let r = BigRational::from_fraction(22, 7).unwrap();
    /// assert_eq!(r.to_string(), "22/7");
    /// ```
    pub fn from_fraction(numerator: i64, denominator: i64) -> ArithmeticResult<Self> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: Rational::from(numerator) / Rational::from(denominator),
        })
    }

    /// Create a rational number from a natural number.
    pub fn from_natural(value: &Natural) -> Self {
        Self {
            value: Rational::from(value),
        }
    }

    /// Add two rational numbers.
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two rational numbers.
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two rational numbers.
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two rational numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(BigRational)` if division succeeds (other is not zero)
    /// * `Err(ArithmeticError::DivisionByZero)` otherwise
    pub fn div(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value / &other.value,
        })
    }

    /// Raise to a non-negative integer power by repeated squaring.
    pub fn powi(&self, exponent: u32) -> Self {
        let mut result = Rational::from(1u32);
        let mut base = self.value.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result *= &base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = &base * &base;
            }
        }
        Self { value: result }
    }

    /// Negate a rational number.
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Check if the rational number is zero.
    pub fn is_zero(&self) -> bool {
        self.value == Rational::ZERO
    }

    /// Check if the rational number is negative.
    pub fn is_negative(&self) -> bool {
        self.value < Rational::ZERO
    }

    /// Absolute value of the reduced numerator
    pub fn numerator(&self) -> Natural {
        self.value.to_numerator()
    }

    /// Reduced denominator (always positive)
    pub fn denominator(&self) -> Natural {
        self.value.to_denominator()
    }
}

impl std::fmt::Display for BigRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
