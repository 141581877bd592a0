//! Square Root Solvers Module
//!
//! Two independent integer square roots over [`CheckedUint`], plus variants
//! that time the computation with a [`Stopwatch`](adapters_time_management::Stopwatch).
//!
//! ## Babylonian iteration
//!
//! ```text
//! approx = n, y = 1
//! while approx > y:
//!     approx = y + (approx - y) / 2
//!     y = n / approx
//! return approx
//! ```
//!
//! The midpoint is the floor of `(approx + y) / 2` written so that it never
//! exceeds `approx`, which keeps the loop inside the bit width even for
//! `n = max_value()`. `y >= 1` throughout, so the division never sees zero.

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

use adapters_time_management::measure;
use entities_numerics::{ArithmeticResult, CheckedUint};
use tracing::debug;

/// Root produced by the Babylonian iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BabylonianRoot<const BITS: u64> {
    /// floor(sqrt(n))
    pub root: CheckedUint<BITS>,
    /// Number of loop iterations taken
    pub iterations: u64,
}

/// A root together with how long it took to compute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtMeasurement<const BITS: u64> {
    /// floor(sqrt(n))
    pub root: CheckedUint<BITS>,
    /// Wall-clock time of the solver alone, in microseconds
    pub elapsed_micros: u64,
    /// Only set for the Babylonian solver
    pub iterations: Option<u64>,
}

/// floor(sqrt(n)) via the library primitive
pub fn library_sqrt<const BITS: u64>(n: &CheckedUint<BITS>) -> CheckedUint<BITS> {
    n.floor_sqrt()
}

/// floor(sqrt(n)) via the Babylonian iteration
///
/// # Returns
///
/// * `Ok(BabylonianRoot)` with the root and iteration count
/// * `Err(ArithmeticError)` if a checked step fails, which would indicate a
///   defect in the iteration rather than a property of `n`
pub fn babylonian_sqrt<const BITS: u64>(
    n: &CheckedUint<BITS>,
) -> ArithmeticResult<BabylonianRoot<BITS>> {
    let mut approx = n.clone();
    let mut y = CheckedUint::one();
    let mut iterations = 0u64;

    while approx > y {
        let half_gap = approx.checked_sub(&y)?.shr(1);
        approx = y.checked_add(&half_gap)?;
        y = n.checked_div(&approx)?;
        iterations += 1;
    }

    Ok(BabylonianRoot {
        root: approx,
        iterations,
    })
}

/// [`library_sqrt`] with elapsed time
pub fn timed_library_sqrt<const BITS: u64>(n: &CheckedUint<BITS>) -> SqrtMeasurement<BITS> {
    let (root, elapsed_micros) = measure(|| library_sqrt(n));
    debug!(elapsed_micros, bits = BITS, "library sqrt finished");
    SqrtMeasurement {
        root,
        elapsed_micros,
        iterations: None,
    }
}

/// [`babylonian_sqrt`] with elapsed time
pub fn timed_babylonian_sqrt<const BITS: u64>(
    n: &CheckedUint<BITS>,
) -> ArithmeticResult<SqrtMeasurement<BITS>> {
    let (result, elapsed_micros) = measure(|| babylonian_sqrt(n));
    let BabylonianRoot { root, iterations } = result?;
    debug!(elapsed_micros, iterations, bits = BITS, "babylonian sqrt finished");
    Ok(SqrtMeasurement {
        root,
        elapsed_micros,
        iterations: Some(iterations),
    })
}
