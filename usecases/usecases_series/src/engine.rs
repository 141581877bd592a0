//! Series Engine Module
//!
//! Sums a series term by term until two successive partial sums are equal or
//! the term ceiling is reached, whichever comes first.
//!
//! ## Algorithm
//!
//! ```text
//! result = T(0), term = start
//! loop:
//!     result = result (+|-) generator(term)
//!     history.push(result)
//!     term += 1
//!     if term == stop          -> CeilingReached
//!     if last two sums equal   -> Converged
//! ```
//!
//! The ceiling is checked first, so a series that would have converged on its
//! last permitted term is still reported as truncated. A run over a single
//! term is always `CeilingReached`. No compensated summation is performed.

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

use entities_numerics::{Accumulable, ArithmeticError, ArithmeticResult};
use tracing::{debug, trace};

use crate::convergence::ConvergenceDetector;
use crate::error::{SeriesError, SeriesResult};
use crate::history::ConvergenceHistory;

/// Whether each term is added to or subtracted from the running sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationMode {
    /// result += term
    Add,
    /// result -= term
    Subtract,
}

/// Why an expansion stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Two successive partial sums were identical
    Converged,
    /// The term ceiling was hit; the value is truncated, not converged
    CeilingReached,
}

/// Outcome of one expansion run, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion<T> {
    /// Final accumulated value
    pub value: T,
    /// Every partial sum, in evaluation order
    pub history: ConvergenceHistory<T>,
    /// How the run ended
    pub termination: Termination,
}

impl<T> Expansion<T> {
    /// Number of terms evaluated
    pub fn terms_evaluated(&self) -> usize {
        self.history.len()
    }

    /// Check if the run stopped on the convergence check
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Upper bound on the partial sums reserved before the first term runs
const HISTORY_RESERVE: u32 = 1024;

fn term_error(index: u32) -> impl Fn(ArithmeticError) -> SeriesError {
    move |source| SeriesError::Term { index, source }
}

/// Series summation over the term indices `[term_start, term_stop)`
#[derive(Debug, Clone)]
pub struct SeriesEngine {
    term_start: u32,
    term_stop: u32,
    detector: ConvergenceDetector,
}

impl SeriesEngine {
    /// Create an engine over `[term_start, term_stop)`
    ///
    /// Fails unless `term_stop > term_start`.
    pub fn new(term_start: u32, term_stop: u32) -> SeriesResult<Self> {
        if term_stop <= term_start {
            return Err(SeriesError::InvalidBounds {
                start: term_start,
                stop: term_stop,
            });
        }
        Ok(Self {
            term_start,
            term_stop,
            detector: ConvergenceDetector::new(),
        })
    }

    /// Create an engine over `[0, max_terms)`
    pub fn with_max_terms(max_terms: u32) -> SeriesResult<Self> {
        Self::new(0, max_terms)
    }

    /// Inclusive first term index
    pub fn term_start(&self) -> u32 {
        self.term_start
    }

    /// Exclusive term ceiling
    pub fn term_stop(&self) -> u32 {
        self.term_stop
    }

    /// Largest number of terms a run can evaluate
    pub fn max_terms(&self) -> u32 {
        self.term_stop - self.term_start
    }

    /// Sum the series in the given mode
    ///
    /// `generator` maps a term index to the term value. It must be pure:
    /// re-running an expansion with the same generator gives the same result.
    pub fn expand<T, G>(&self, mode: AccumulationMode, generator: G) -> SeriesResult<Expansion<T>>
    where
        T: Accumulable,
        G: Fn(u32) -> ArithmeticResult<T>,
    {
        let mut result = T::from_small(0).map_err(term_error(self.term_start))?;
        let reserve = self.max_terms().min(HISTORY_RESERVE) as usize;
        let mut history = ConvergenceHistory::with_capacity(reserve);
        let mut term = self.term_start;

        let termination = loop {
            let value = generator(term).map_err(term_error(term))?;
            result = match mode {
                AccumulationMode::Add => result.add_term(&value),
                AccumulationMode::Subtract => result.sub_term(&value),
            }
            .map_err(term_error(term))?;
            trace!(term, partial = %result, "accumulated term");
            history.push(result.clone());

            term += 1;
            if term == self.term_stop {
                break Termination::CeilingReached;
            }
            if let Some((current, previous)) = history.last_two() {
                if self.detector.has_converged(current, previous) {
                    break Termination::Converged;
                }
            }
        };

        debug!(terms = history.len(), ?termination, "expansion finished");
        Ok(Expansion {
            value: result,
            history,
            termination,
        })
    }

    /// Sum the series, adding every term
    pub fn expand_by_adding<T, G>(&self, generator: G) -> SeriesResult<Expansion<T>>
    where
        T: Accumulable,
        G: Fn(u32) -> ArithmeticResult<T>,
    {
        self.expand(AccumulationMode::Add, generator)
    }

    /// Sum the series, subtracting every term
    pub fn expand_by_subtracting<T, G>(&self, generator: G) -> SeriesResult<Expansion<T>>
    where
        T: Accumulable,
        G: Fn(u32) -> ArithmeticResult<T>,
    {
        self.expand(AccumulationMode::Subtract, generator)
    }

    /// Final value of [`expand_by_adding`](Self::expand_by_adding)
    pub fn approximate_by_adding<T, G>(&self, generator: G) -> SeriesResult<T>
    where
        T: Accumulable,
        G: Fn(u32) -> ArithmeticResult<T>,
    {
        Ok(self.expand_by_adding(generator)?.value)
    }

    /// Final value of [`expand_by_subtracting`](Self::expand_by_subtracting)
    pub fn approximate_by_subtracting<T, G>(&self, generator: G) -> SeriesResult<T>
    where
        T: Accumulable,
        G: Fn(u32) -> ArithmeticResult<T>,
    {
        Ok(self.expand_by_subtracting(generator)?.value)
    }
}
