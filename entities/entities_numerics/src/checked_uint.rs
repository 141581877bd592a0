//! Checked Unsigned Integer Module
//!
//! Provides fixed-width unsigned integers of arbitrary size with checked
//! arithmetic. Every operation that would leave `[0, 2^BITS)` fails with
//! [`ArithmeticError::Overflow`] instead of wrapping.
//!
//! The magnitude is held in a `malachite` `Natural`, which does the actual
//! arithmetic. This type only enforces the width.

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

use std::str::FromStr;

use malachite::base::num::arithmetic::traits::FloorSqrt;
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::FromStringBase;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Natural;

use crate::error::{ArithmeticError, ArithmeticResult};

/// Unsigned integer limited to `BITS` bits
///
/// Mirrors a `checked_uint<BITS>`: values are immutable, every arithmetic
/// method returns a fresh value or an error.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckedUint<const BITS: u64> {
    value: Natural,
}

/// 1024-bit checked unsigned integer
pub type U1024 = CheckedUint<1024>;

/// 2048-bit checked unsigned integer
pub type U2048 = CheckedUint<2048>;

impl<const BITS: u64> CheckedUint<BITS> {
    /// Declared width in bits
    pub const BITS: u64 = BITS;

    /// The additive identity
    pub fn zero() -> Self {
        Self {
            value: Natural::ZERO,
        }
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self {
            value: Natural::ONE,
        }
    }

    /// Largest representable value, `2^BITS - 1`
    pub fn max_value() -> Self {
        Self {
            value: (Natural::ONE << BITS) - Natural::ONE,
        }
    }

    /// Create from a u64
    ///
    /// Fails only for widths below 64 bits.
    pub fn from_u64(value: u64) -> ArithmeticResult<Self> {
        Self::from_natural(Natural::from(value))
    }

    /// Create from a `Natural`, checking the width
    pub fn from_natural(value: Natural) -> ArithmeticResult<Self> {
        if value.significant_bits() > BITS {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Self { value })
    }

    /// `2^exponent`
    pub fn power_of_two(exponent: u64) -> ArithmeticResult<Self> {
        Self::one().checked_shl(exponent)
    }

    /// Assemble from 64-bit words, least significant first
    pub fn from_u64_words(words: &[u64]) -> ArithmeticResult<Self> {
        let mut value = Natural::ZERO;
        for word in words.iter().rev() {
            value = (value << 64u64) + Natural::from(*word);
        }
        Self::from_natural(value)
    }

    /// Number of significant bits (0 for zero)
    pub fn bits(&self) -> u64 {
        self.value.significant_bits()
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.value == Natural::ZERO
    }

    /// x + y
    pub fn checked_add(&self, other: &Self) -> ArithmeticResult<Self> {
        Self::from_natural(&self.value + &other.value)
    }

    /// x - y
    ///
    /// A negative result is out of range and reported as overflow.
    pub fn checked_sub(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.value > self.value {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Self {
            value: &self.value - &other.value,
        })
    }

    /// x * y
    pub fn checked_mul(&self, other: &Self) -> ArithmeticResult<Self> {
        // Product width is at most the sum of operand widths
        if self.bits() + other.bits() > BITS + 1 {
            return Err(ArithmeticError::Overflow);
        }
        Self::from_natural(&self.value * &other.value)
    }

    /// x / y, truncated
    pub fn checked_div(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value / &other.value,
        })
    }

    /// x % y
    pub fn checked_rem(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            value: &self.value % &other.value,
        })
    }

    /// x << shift
    ///
    /// Fails if any set bit would be shifted past the declared width.
    pub fn checked_shl(&self, shift: u64) -> ArithmeticResult<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        if self.bits().saturating_add(shift) > BITS {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Self {
            value: &self.value << shift,
        })
    }

    /// x >> shift
    pub fn shr(&self, shift: u64) -> Self {
        Self {
            value: &self.value >> shift,
        }
    }

    /// x ^ exponent by repeated squaring, checked at every step
    pub fn checked_pow(&self, exponent: u32) -> ArithmeticResult<Self> {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// floor(sqrt(x)) computed by the `malachite` primitive
    pub fn floor_sqrt(&self) -> Self {
        Self {
            value: (&self.value).floor_sqrt(),
        }
    }

    /// Hex representation with a `0x` prefix
    pub fn to_hex_string(&self) -> String {
        format!("0x{:x}", self.value)
    }

    /// Get the internal Natural value (for advanced use)
    pub fn as_natural(&self) -> &Natural {
        &self.value
    }

    /// Consume into the internal Natural value
    pub fn into_natural(self) -> Natural {
        self.value
    }
}

impl<const BITS: u64> Default for CheckedUint<BITS> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const BITS: u64> std::fmt::Display for CheckedUint<BITS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const BITS: u64> std::fmt::LowerHex for CheckedUint<BITS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:x}", self.value)
    }
}

impl<const BITS: u64> FromStr for CheckedUint<BITS> {
    type Err = ArithmeticError;

    /// Parse a decimal literal, or a hex literal with a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            return Self::from_natural(parse_hex(hex, BITS)?);
        }
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::Parse(s.to_string()));
        }
        let value =
            Natural::from_str(trimmed).map_err(|_| ArithmeticError::Parse(s.to_string()))?;
        Self::from_natural(value)
    }
}

fn parse_hex(digits: &str, width: u64) -> ArithmeticResult<Natural> {
    let parse_error = || ArithmeticError::Parse(format!("0x{}", digits));
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(parse_error());
    }
    // Four bits per significant digit; reject before building the value
    let significant = digits.trim_start_matches('0');
    if significant.len() as u64 > (width + 3) / 4 {
        return Err(ArithmeticError::Overflow);
    }
    Natural::from_string_base(16, digits).ok_or_else(parse_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    type U64 = CheckedUint<64>;

    #[test]
    fn test_creation() {
        assert!(U1024::zero().is_zero());
        assert_eq!(U1024::one().bits(), 1);
        assert_eq!(U1024::max_value().bits(), 1024);
        assert_eq!(U2048::max_value().bits(), 2048);
        assert_eq!(U1024::default(), U1024::zero());
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = U1024::from_u64(100).unwrap();
        let b = U1024::from_u64(30).unwrap();

        assert_eq!(a.checked_add(&b).unwrap().to_string(), "130");
        assert_eq!(a.checked_sub(&b).unwrap().to_string(), "70");
        assert_eq!(a.checked_mul(&b).unwrap().to_string(), "3000");
        assert_eq!(a.checked_div(&b).unwrap().to_string(), "3");
        assert_eq!(a.checked_rem(&b).unwrap().to_string(), "10");
    }

    #[test]
    fn test_add_overflow() {
        let max = U1024::max_value();
        assert_eq!(max.checked_add(&U1024::one()), Err(ArithmeticError::Overflow));
        assert_eq!(max.checked_add(&U1024::zero()), Ok(max));
    }

    #[test]
    fn test_sub_below_zero() {
        let a = U1024::from_u64(1).unwrap();
        let b = U1024::from_u64(2).unwrap();
        assert_eq!(a.checked_sub(&b), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_mul_overflow() {
        let half = U1024::power_of_two(512).unwrap();
        assert_eq!(half.checked_mul(&half), Err(ArithmeticError::Overflow));

        let below = U1024::power_of_two(511).unwrap();
        assert_eq!(below.checked_mul(&half).unwrap().bits(), 1024);
    }

    #[test]
    fn test_division_by_zero() {
        let a = U1024::from_u64(7).unwrap();
        assert_eq!(a.checked_div(&U1024::zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(a.checked_rem(&U1024::zero()), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_shift_operations() {
        let a = U1024::from_u64(10).unwrap();
        assert_eq!(a.checked_shl(2).unwrap().to_string(), "40");
        assert_eq!(a.shr(1).to_string(), "5");
        assert_eq!(U1024::zero().checked_shl(5000), Ok(U1024::zero()));
    }

    #[test]
    fn test_max_shift_overflows() {
        assert_eq!(
            U1024::max_value().checked_shl(1),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            U1024::power_of_two(1023).unwrap().checked_shl(1),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_pow() {
        let two = U64::from_u64(2).unwrap();
        assert_eq!(two.checked_pow(63).unwrap().to_string(), "9223372036854775808");
        assert_eq!(two.checked_pow(64), Err(ArithmeticError::Overflow));
        assert_eq!(two.checked_pow(0).unwrap(), U64::one());
    }

    #[test]
    fn test_floor_sqrt() {
        let n = U1024::from_u64(99).unwrap();
        assert_eq!(n.floor_sqrt().to_string(), "9");
        assert_eq!(U1024::zero().floor_sqrt(), U1024::zero());
    }

    #[test]
    fn test_string_conversion() {
        let n = U1024::from_u64(255).unwrap();
        assert_eq!(n.to_string(), "255");
        assert_eq!(n.to_hex_string(), "0xff");
        assert_eq!(format!("{:x}", n), "ff");
    }

    #[test]
    fn test_from_u64_words() {
        assert_eq!(U1024::from_u64_words(&[]).unwrap(), U1024::zero());
        assert_eq!(
            U1024::from_u64_words(&[5, 1]).unwrap(),
            U1024::power_of_two(64)
                .unwrap()
                .checked_add(&U1024::from_u64(5).unwrap())
                .unwrap()
        );
        assert_eq!(U1024::from_u64_words(&[u64::MAX; 16]).unwrap(), U1024::max_value());
        assert_eq!(
            U1024::from_u64_words(&[0; 17]).unwrap(),
            U1024::zero()
        );
        let mut too_wide = [0u64; 17];
        too_wide[16] = 1;
        assert_eq!(U1024::from_u64_words(&too_wide), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_parse() {
        assert_eq!("12345".parse::<U1024>().unwrap().to_string(), "12345");
        assert_eq!(" 0xFF ".parse::<U1024>().unwrap().to_string(), "255");
        assert!(matches!("".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
        assert!(matches!("12a".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
        assert!(matches!("-1".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
        assert!(matches!("0x".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
        assert!(matches!("0x1g".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
        assert!(matches!("0x-1".parse::<U1024>(), Err(ArithmeticError::Parse(_))));
    }

    #[test]
    fn test_parse_hex_width() {
        assert_eq!(
            "0xffffffffffffffff".parse::<U64>().unwrap(),
            U64::max_value()
        );
        // Leading zeros do not count against the width
        assert_eq!("0x0000000000000000001".parse::<U64>().unwrap(), U64::one());
        assert_eq!("0x10000000000000000".parse::<U64>(), Err(ArithmeticError::Overflow));
        // Within the digit budget but still one bit too wide
        assert_eq!(
            "0x1ffffffffffffffff".parse::<CheckedUint<65>>().unwrap().bits(),
            65
        );
        assert_eq!(
            "0x2ffffffffffffffff".parse::<CheckedUint<65>>(),
            Err(ArithmeticError::Overflow)
        );
        let long = format!("0x{}", "f".repeat(100_000));
        assert_eq!(long.parse::<U1024>(), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_parse_too_wide() {
        // 2^64 needs 65 bits
        assert_eq!(
            "18446744073709551616".parse::<U64>(),
            Err(ArithmeticError::Overflow)
        );
        assert!("18446744073709551615".parse::<U64>().is_ok());
    }

    #[test]
    fn test_max_round_trip() {
        let max = U1024::max_value();
        let parsed: U1024 = max.to_string().parse().unwrap();
        assert_eq!(parsed, max);
        let parsed_hex: U1024 = max.to_hex_string().parse().unwrap();
        assert_eq!(parsed_hex, max);
    }
}
