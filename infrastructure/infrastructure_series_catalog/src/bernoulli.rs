//! Bernoulli Numbers Module
//!
//! Exact Bernoulli numbers `B_0 ..= B_m` computed with the Akiyama–Tanigawa
//! recurrence over rationals. The table is built once and shared by every
//! term of the tangent series.
//!
//! The recurrence yields `B_1 = +1/2`; only even indices are used here, where
//! the sign conventions agree.

use entities_numerics::{ArithmeticError, ArithmeticResult, BigRational};

/// B_0 through B_max_index, exact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BernoulliTable {
    numbers: Vec<BigRational>,
}

impl BernoulliTable {
    /// Compute every Bernoulli number up to and including `max_index`
    pub fn new(max_index: u32) -> ArithmeticResult<Self> {
        let len = max_index as usize + 1;
        let mut scratch: Vec<BigRational> = Vec::with_capacity(len);
        let mut numbers = Vec::with_capacity(len);

        for m in 0..len {
            scratch.push(BigRational::from_fraction(1, m as i64 + 1)?);
            for j in (1..=m).rev() {
                let weight = BigRational::from_i64(j as i64);
                scratch[j - 1] = weight.times(&scratch[j - 1].minus(&scratch[j]));
            }
            numbers.push(scratch[0].clone());
        }

        Ok(Self { numbers })
    }

    /// Highest index held
    pub fn max_index(&self) -> u32 {
        (self.numbers.len() - 1) as u32
    }

    /// B_index
    ///
    /// Fails with [`ArithmeticError::Domain`] past the end of the table.
    pub fn get(&self, index: u32) -> ArithmeticResult<&BigRational> {
        self.numbers
            .get(index as usize)
            .ok_or(ArithmeticError::Domain("bernoulli table"))
    }

    /// B_2n
    pub fn even(&self, n: u32) -> ArithmeticResult<&BigRational> {
        let index = n.checked_mul(2).ok_or(ArithmeticError::Overflow)?;
        self.get(index)
    }
}
