//! Maclaurin Term Generators Module
//!
//! Each [`Maclaurin`] value is a pure term generator: `term(n)` depends only on
//! `n` and the immutable parameters captured at construction.
//!
//! Series whose argument is rational build each term exactly as a
//! [`BigRational`] and round once. Series whose argument is a multiple of pi
//! compute `x^k` with a single rounding and divide by the rounded factorial.
//! Factorials are checked 2048-bit integers, so a term needing more than
//! `300!` fails with `Overflow` instead of losing range.

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

use entities_numerics::{ArithmeticError, ArithmeticResult, BigRational, Decimal50, U2048};

use crate::bernoulli::BernoulliTable;

/// Largest `k` with `k!` below `2^2048`
pub const FACTORIAL_LIMIT: u32 = 300;

/// k!, checked against the 2048-bit width
pub fn factorial(k: u32) -> ArithmeticResult<U2048> {
    let mut result = U2048::one();
    for factor in 2..=u64::from(k) {
        result = result.checked_mul(&U2048::from_u64(factor)?)?;
    }
    Ok(result)
}

fn rational_factorial(k: u32) -> ArithmeticResult<BigRational> {
    Ok(BigRational::from_natural(factorial(k)?.as_natural()))
}

fn decimal_factorial(k: u32) -> ArithmeticResult<Decimal50> {
    Decimal50::try_from_uint(&factorial(k)?)
}

fn alternate(value: Decimal50, n: u32) -> Decimal50 {
    if n & 1 == 1 {
        -value
    } else {
        value
    }
}

fn checked_index(n: u32, scale: u32, offset: u32) -> ArithmeticResult<u32> {
    n.checked_mul(scale)
        .and_then(|k| k.checked_add(offset))
        .ok_or(ArithmeticError::Overflow)
}

/// A Maclaurin series and its argument
#[derive(Debug, Clone)]
pub enum Maclaurin {
    /// sin x = sum (-1)^n x^(2n+1) / (2n+1)!
    Sine { x: Decimal50 },
    /// cos x = sum (-1)^n x^(2n) / (2n)!
    Cosine { x: Decimal50 },
    /// tan x = sum_{k>=1} (-1)^k 4^k (1 - 4^k) B_2k x^(2k-1) / (2k)!, k = n + 1
    Tangent {
        x: Decimal50,
        bernoulli: BernoulliTable,
    },
    /// cosh x = sum x^(2n) / (2n)!
    HyperbolicCosine { x: Decimal50 },
    /// asinh x = sum (-1)^n (2n)! x^(2n+1) / (4^n (n!)^2 (2n+1))
    InverseHyperbolicSine { x: BigRational },
    /// ln(1 + x) = sum (-1)^n x^(n+1) / (n+1)
    LogOnePlus { x: BigRational },
    /// (1 + x)^a = sum C(a, n) x^n
    Binomial { x: BigRational, exponent: BigRational },
    /// 1 / (1 - x) = sum x^n
    Geometric { x: Decimal50 },
    /// e = sum 1 / n!
    Euler,
}

impl Maclaurin {
    /// Tangent series with Bernoulli numbers for term indices below `term_stop`
    ///
    /// The table stops at [`FACTORIAL_LIMIT`]; later terms fail on the
    /// factorial first.
    pub fn tangent(x: Decimal50, term_stop: u32) -> ArithmeticResult<Self> {
        let max_index = term_stop.saturating_mul(2).min(FACTORIAL_LIMIT);
        Ok(Self::Tangent {
            x,
            bernoulli: BernoulliTable::new(max_index)?,
        })
    }

    /// The n-th term, counting from zero
    pub fn term(&self, n: u32) -> ArithmeticResult<Decimal50> {
        match self {
            Self::Sine { x } => {
                let k = checked_index(n, 2, 1)?;
                let term = x.checked_powi(k)?.checked_div(&decimal_factorial(k)?)?;
                Ok(alternate(term, n))
            }
            Self::Cosine { x } => {
                let k = checked_index(n, 2, 0)?;
                let term = x.checked_powi(k)?.checked_div(&decimal_factorial(k)?)?;
                Ok(alternate(term, n))
            }
            Self::Tangent { x, bernoulli } => {
                let k = n.checked_add(1).ok_or(ArithmeticError::Overflow)?;
                let two_k = checked_index(k, 2, 0)?;
                let factorial = rational_factorial(two_k)?;
                let four_k = BigRational::from_i64(4).powi(k);
                let mut coefficient = bernoulli
                    .even(k)?
                    .times(&four_k)
                    .times(&BigRational::from_i64(1).minus(&four_k))
                    .div(&factorial)?;
                if k & 1 == 1 {
                    coefficient = coefficient.neg();
                }
                Decimal50::from_rational(&coefficient)?.checked_mul(&x.checked_powi(two_k - 1)?)
            }
            Self::HyperbolicCosine { x } => {
                let k = checked_index(n, 2, 0)?;
                x.checked_powi(k)?.checked_div(&decimal_factorial(k)?)
            }
            Self::InverseHyperbolicSine { x } => {
                let two_n = checked_index(n, 2, 0)?;
                let n_factorial = rational_factorial(n)?;
                let denominator = BigRational::from_i64(4)
                    .powi(n)
                    .times(&n_factorial.times(&n_factorial))
                    .times(&BigRational::from_i64(i64::from(two_n) + 1));
                let mut term = rational_factorial(two_n)?
                    .div(&denominator)?
                    .times(&x.powi(two_n + 1));
                if n & 1 == 1 {
                    term = term.neg();
                }
                Decimal50::from_rational(&term)
            }
            Self::LogOnePlus { x } => {
                let k = n.checked_add(1).ok_or(ArithmeticError::Overflow)?;
                let mut term = x.powi(k).div(&BigRational::from_i64(i64::from(k)))?;
                if n & 1 == 1 {
                    term = term.neg();
                }
                Decimal50::from_rational(&term)
            }
            Self::Binomial { x, exponent } => {
                let mut coefficient = BigRational::from_i64(1);
                for i in 0..n {
                    let i = i64::from(i);
                    let numerator = exponent.minus(&BigRational::from_i64(i));
                    coefficient = coefficient
                        .times(&numerator)
                        .div(&BigRational::from_i64(i + 1))?;
                }
                Decimal50::from_rational(&coefficient.times(&x.powi(n)))
            }
            Self::Geometric { x } => x.checked_powi(n),
            Self::Euler => {
                Decimal50::from_rational(&BigRational::from_i64(1).div(&rational_factorial(n)?)?)
            }
        }
    }
}
