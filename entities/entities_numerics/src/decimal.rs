//! Fixed-Digit Decimal Module
//!
//! Provides a signed decimal floating-point type with a fixed number of
//! significant digits, used for transcendental approximations.
//!
//! ## Representation
//!
//! A value is `(-1)^negative * coefficient * 10^exponent` where the
//! coefficient has at most `DIGITS` decimal digits and no trailing zeros.
//! Zero is always stored as `+0 * 10^0`. The form is canonical, so two values
//! are numerically equal exactly when their fields are equal. The series
//! convergence check depends on that.
//!
//! ## Rounding
//!
//! Every operation computes its exact result (or an exact result plus a
//! sticky digit) and rounds once to `DIGITS` significant digits using
//! round-half-to-even.
//!
//! ## Range
//!
//! The most significant digit must stay within `10^±MAX_EXPONENT`. Larger
//! magnitudes fail with [`ArithmeticError::Overflow`]; smaller ones flush to
//! zero.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{FloorSqrt, Pow};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::Natural;

use crate::checked_uint::CheckedUint;
use crate::error::{ArithmeticError, ArithmeticResult};
use crate::rational::BigRational;

/// Largest decimal exponent of the leading digit
pub const MAX_EXPONENT: i64 = 1_000_000;

/// Above this many result digits `checked_powi` rounds per step instead of
/// computing the exact power
const EXACT_POWER_DIGITS: u64 = 100_000;

/// Signed decimal with `DIGITS` significant digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigDecimal<const DIGITS: u32 = 50> {
    negative: bool,
    coefficient: Natural,
    exponent: i64,
}

/// 50 significant digit decimal
pub type Decimal50 = BigDecimal<50>;

fn pow10(k: u64) -> Natural {
    Natural::from(10u32).pow(k)
}

fn decimal_digits(n: &Natural) -> u64 {
    n.to_string().len() as u64
}

fn is_odd(n: &Natural) -> bool {
    n % Natural::from(2u32) == Natural::ONE
}

impl<const DIGITS: u32> BigDecimal<DIGITS> {
    /// Significant digits kept by every operation
    pub const PRECISION: u32 = DIGITS;

    /// The additive identity
    pub fn zero() -> Self {
        Self {
            negative: false,
            coefficient: Natural::ZERO,
            exponent: 0,
        }
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self {
            negative: false,
            coefficient: Natural::ONE,
            exponent: 0,
        }
    }

    /// Create from an i64, rounding if it has more than `DIGITS` digits
    pub fn from_i64(value: i64) -> ArithmeticResult<Self> {
        Self::round(value < 0, Natural::from(value.unsigned_abs()), 0)
    }

    /// Create from a u64, rounding if it has more than `DIGITS` digits
    pub fn from_u64(value: u64) -> ArithmeticResult<Self> {
        Self::round(false, Natural::from(value), 0)
    }

    /// Create from an exact natural number, rounded to `DIGITS` digits
    pub fn from_natural(value: &Natural) -> ArithmeticResult<Self> {
        Self::round(false, value.clone(), 0)
    }

    /// Explicit conversion from a checked integer, rounded to `DIGITS` digits
    pub fn try_from_uint<const BITS: u64>(value: &CheckedUint<BITS>) -> ArithmeticResult<Self> {
        Self::from_natural(value.as_natural())
    }

    /// Exact rational rounded once to `DIGITS` digits
    pub fn from_rational(value: &BigRational) -> ArithmeticResult<Self> {
        let numerator = value.numerator();
        let denominator = value.denominator();
        Self::divide_naturals(value.is_negative(), &numerator, &denominator, 0)
    }

    /// Build a value from its parts, rounding and range checking
    ///
    /// This is the only way values with a non-zero coefficient come into
    /// existence, so every value is canonical.
    fn round(negative: bool, coefficient: Natural, exponent: i64) -> ArithmeticResult<Self> {
        if coefficient == Natural::ZERO {
            return Ok(Self::zero());
        }
        let mut coefficient = coefficient;
        let mut exponent = exponent;
        let digits = decimal_digits(&coefficient);
        let precision = u64::from(DIGITS);
        if digits > precision {
            let drop = digits - precision;
            let divisor = pow10(drop);
            let mut quotient = &coefficient / &divisor;
            let twice_remainder = (&coefficient % &divisor) << 1u64;
            match twice_remainder.cmp(&divisor) {
                Ordering::Greater => quotient += Natural::ONE,
                Ordering::Equal if is_odd(&quotient) => quotient += Natural::ONE,
                _ => {}
            }
            exponent = exponent
                .checked_add(drop as i64)
                .ok_or(ArithmeticError::Overflow)?;
            // 99..9 rounded up gains a digit
            if quotient == pow10(precision) {
                quotient = Natural::from(10u32).pow(precision - 1);
                exponent += 1;
            }
            coefficient = quotient;
        }
        let ten = Natural::from(10u32);
        while &coefficient % &ten == Natural::ZERO {
            coefficient /= &ten;
            exponent = exponent.saturating_add(1);
        }
        let top = exponent.saturating_add(decimal_digits(&coefficient) as i64 - 1);
        if top > MAX_EXPONENT {
            return Err(ArithmeticError::Overflow);
        }
        if top < -MAX_EXPONENT {
            return Ok(Self::zero());
        }
        Ok(Self {
            negative,
            coefficient,
            exponent,
        })
    }

    /// Correctly rounded `num / den * 10^exponent`
    fn divide_naturals(
        negative: bool,
        num: &Natural,
        den: &Natural,
        exponent: i64,
    ) -> ArithmeticResult<Self> {
        if *den == Natural::ZERO {
            return Err(ArithmeticError::DivisionByZero);
        }
        if *num == Natural::ZERO {
            return Ok(Self::zero());
        }
        // Enough extra digits that the sticky digit sits below the rounding position
        let wanted = i64::from(DIGITS) + 3 + decimal_digits(den) as i64 - decimal_digits(num) as i64;
        let mut shift = wanted.max(0);
        let scaled = num * pow10(shift as u64);
        let mut quotient = &scaled / den;
        if &scaled % den != Natural::ZERO {
            quotient = quotient * Natural::from(10u32) + Natural::ONE;
            shift += 1;
        }
        let exponent = exponent.checked_sub(shift).ok_or(ArithmeticError::Overflow)?;
        Self::round(negative, quotient, exponent)
    }

    /// Decimal position of the leading digit (value is in `[10^top, 10^(top+1))`)
    fn top(&self) -> i64 {
        self.exponent + decimal_digits(&self.coefficient) as i64 - 1
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.coefficient == Natural::ZERO
    }

    /// Check if the value is strictly negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            coefficient: self.coefficient.clone(),
            exponent: self.exponent,
        }
    }

    /// Coefficient and exponent of the canonical form
    pub fn parts(&self) -> (bool, &Natural, i64) {
        (self.negative, &self.coefficient, self.exponent)
    }

    /// x + y
    pub fn checked_add(&self, other: &Self) -> ArithmeticResult<Self> {
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }
        let (hi, lo) = if self.top() >= other.top() {
            (self, other)
        } else {
            (other, self)
        };
        let guard = i64::from(DIGITS) + 2;
        if hi.top() - lo.top() > guard {
            // `lo` lies entirely below the rounding position and can only
            // break ties, so it is replaced by one unit far below `hi`
            let sticky_position = hi.top() - guard - 2;
            let shift = (hi.exponent - sticky_position) as u64;
            let scaled = &hi.coefficient * pow10(shift);
            let coefficient = if hi.negative == lo.negative {
                scaled + Natural::ONE
            } else {
                scaled - Natural::ONE
            };
            return Self::round(hi.negative, coefficient, sticky_position);
        }
        let exponent = self.exponent.min(other.exponent);
        let a = &self.coefficient * pow10((self.exponent - exponent) as u64);
        let b = &other.coefficient * pow10((other.exponent - exponent) as u64);
        if self.negative == other.negative {
            return Self::round(self.negative, a + b, exponent);
        }
        match a.cmp(&b) {
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => Self::round(self.negative, a - b, exponent),
            Ordering::Less => Self::round(other.negative, b - a, exponent),
        }
    }

    /// x - y
    pub fn checked_sub(&self, other: &Self) -> ArithmeticResult<Self> {
        self.checked_add(&-other)
    }

    /// x * y
    pub fn checked_mul(&self, other: &Self) -> ArithmeticResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        let exponent = self
            .exponent
            .checked_add(other.exponent)
            .ok_or(ArithmeticError::Overflow)?;
        Self::round(
            self.negative != other.negative,
            &self.coefficient * &other.coefficient,
            exponent,
        )
    }

    /// x / y
    pub fn checked_div(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let exponent = self
            .exponent
            .checked_sub(other.exponent)
            .ok_or(ArithmeticError::Overflow)?;
        Self::divide_naturals(
            self.negative != other.negative,
            &self.coefficient,
            &other.coefficient,
            exponent,
        )
    }

    /// x ^ n
    ///
    /// The power of the coefficient is computed exactly and rounded once, so
    /// the result is correctly rounded. Very large results fall back to
    /// square-and-multiply with rounding at each step.
    pub fn checked_powi(&self, n: u32) -> ArithmeticResult<Self> {
        if n == 0 {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let negative = self.negative && n & 1 == 1;
        if decimal_digits(&self.coefficient).saturating_mul(u64::from(n)) <= EXACT_POWER_DIGITS {
            // Leading digit of the result is at least n * top
            if (self.top().unsigned_abs()).saturating_mul(u64::from(n)) > 2 * MAX_EXPONENT as u64 {
                return if self.top() >= 0 {
                    Err(ArithmeticError::Overflow)
                } else {
                    Ok(Self::zero())
                };
            }
            let exponent = self
                .exponent
                .checked_mul(i64::from(n))
                .ok_or(ArithmeticError::Overflow)?;
            let coefficient = (&self.coefficient).pow(u64::from(n));
            return Self::round(negative, coefficient, exponent);
        }
        let mut result = Self::one();
        let mut base = self.abs();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(if negative { -result } else { result })
    }

    /// x * 10^k, exact apart from range checks
    pub fn checked_mul_pow10(&self, k: i64) -> ArithmeticResult<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let exponent = self.exponent.checked_add(k).ok_or(ArithmeticError::Overflow)?;
        Self::round(self.negative, self.coefficient.clone(), exponent)
    }

    /// Square root rounded to `DIGITS` digits
    ///
    /// Scales the coefficient so its integer square root carries a few guard
    /// digits, then rounds once.
    pub fn sqrt(&self) -> ArithmeticResult<Self> {
        if self.negative {
            return Err(ArithmeticError::Domain("sqrt"));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let wanted = 2 * (i64::from(DIGITS) + 3);
        let mut shift = (wanted - decimal_digits(&self.coefficient) as i64).max(0);
        if (self.exponent - shift) % 2 != 0 {
            shift += 1;
        }
        let scaled = &self.coefficient * pow10(shift as u64);
        let mut root = (&scaled).floor_sqrt();
        let mut exponent = (self.exponent - shift) / 2;
        if &root * &root != scaled {
            root = root * Natural::from(10u32) + Natural::ONE;
            exponent -= 1;
        }
        Self::round(false, root, exponent)
    }

    /// Explicit conversion to a checked integer
    ///
    /// Fails with [`ArithmeticError::Inexact`] for negative or fractional
    /// values and with [`ArithmeticError::Overflow`] when wider than `BITS`.
    pub fn to_checked_uint<const BITS: u64>(&self) -> ArithmeticResult<CheckedUint<BITS>> {
        if self.is_zero() {
            return Ok(CheckedUint::zero());
        }
        if self.negative || self.exponent < 0 {
            return Err(ArithmeticError::Inexact);
        }
        // 10^BITS is already wider than 2^BITS
        if self.exponent as u64 > BITS {
            return Err(ArithmeticError::Overflow);
        }
        CheckedUint::from_natural(&self.coefficient * pow10(self.exponent as u64))
    }

    /// Fixed notation with exactly `places` digits after the point,
    /// rounded half-to-even
    pub fn to_fixed(&self, places: usize) -> String {
        let places_i = places as i64;
        let scaled = if self.exponent >= -places_i {
            &self.coefficient * pow10((self.exponent + places_i) as u64)
        } else {
            let divisor = pow10((-places_i - self.exponent) as u64);
            let mut quotient = &self.coefficient / &divisor;
            let twice_remainder = (&self.coefficient % &divisor) << 1u64;
            match twice_remainder.cmp(&divisor) {
                Ordering::Greater => quotient += Natural::ONE,
                Ordering::Equal if is_odd(&quotient) => quotient += Natural::ONE,
                _ => {}
            }
            quotient
        };
        let mut digits = scaled.to_string();
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }
        let sign = if self.negative && scaled != Natural::ZERO {
            "-"
        } else {
            ""
        };
        if places == 0 {
            return format!("{}{}", sign, digits);
        }
        let point = digits.len() - places;
        format!("{}{}.{}", sign, &digits[..point], &digits[point..])
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        match self.top().cmp(&other.top()) {
            Ordering::Equal => {
                let exponent = self.exponent.min(other.exponent);
                let a = &self.coefficient * pow10((self.exponent - exponent) as u64);
                let b = &other.coefficient * pow10((other.exponent - exponent) as u64);
                a.cmp(&b)
            }
            ordering => ordering,
        }
    }
}

impl<const DIGITS: u32> Default for BigDecimal<DIGITS> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const DIGITS: u32> std::ops::Neg for BigDecimal<DIGITS> {
    type Output = Self;

    fn neg(self) -> Self {
        let negative = !self.negative && !self.is_zero();
        Self { negative, ..self }
    }
}

impl<const DIGITS: u32> std::ops::Neg for &BigDecimal<DIGITS> {
    type Output = BigDecimal<DIGITS>;

    fn neg(self) -> BigDecimal<DIGITS> {
        -self.clone()
    }
}

impl<const DIGITS: u32> PartialOrd for BigDecimal<DIGITS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const DIGITS: u32> Ord for BigDecimal<DIGITS> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal if self.negative => other.cmp_magnitude(self),
            Ordering::Equal => self.cmp_magnitude(other),
            ordering => ordering,
        }
    }
}

impl<const DIGITS: u32> std::fmt::Display for BigDecimal<DIGITS> {
    /// Exact positional notation; scientific notation once the padding
    /// zeros would outnumber the significant digits
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let sign = if self.negative { "-" } else { "" };
        let digits = self.coefficient.to_string();
        let len = digits.len() as i64;
        let limit = i64::from(DIGITS);
        if self.exponent >= 0 {
            if self.exponent > limit {
                return write!(f, "{}{}e{}", sign, with_point(&digits), self.top());
            }
            return write!(f, "{}{}{}", sign, digits, "0".repeat(self.exponent as usize));
        }
        let point = len + self.exponent;
        if point > 0 {
            let point = point as usize;
            write!(f, "{}{}.{}", sign, &digits[..point], &digits[point..])
        } else if -point > limit {
            write!(f, "{}{}e{}", sign, with_point(&digits), self.top())
        } else {
            write!(f, "{}0.{}{}", sign, "0".repeat((-point) as usize), digits)
        }
    }
}

fn with_point(digits: &str) -> String {
    if digits.len() == 1 {
        digits.to_string()
    } else {
        format!("{}.{}", &digits[..1], &digits[1..])
    }
}

impl<const DIGITS: u32> FromStr for BigDecimal<DIGITS> {
    type Err = ArithmeticError;

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`, rounding to `DIGITS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || ArithmeticError::Parse(s.to_string());
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(idx) => {
                let exponent: i64 = unsigned[idx + 1..].parse().map_err(|_| parse_error())?;
                (&unsigned[..idx], exponent)
            }
            None => (unsigned, 0),
        };
        let (integral, fractional) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };
        if integral.is_empty() && fractional.is_empty() {
            return Err(parse_error());
        }
        if !integral
            .bytes()
            .chain(fractional.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(parse_error());
        }
        let digits = format!("{}{}", integral, fractional);
        let coefficient = Natural::from_str(&digits).map_err(|_| parse_error())?;
        let exponent = exponent
            .checked_sub(fractional.len() as i64)
            .ok_or(ArithmeticError::Overflow)?;
        Self::round(negative, coefficient, exponent)
    }
}
