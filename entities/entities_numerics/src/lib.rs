//! Entities Layer: Numerics
//!
//! Provides the value types every computation in the laboratory is built on:
//! - Checked fixed-width unsigned integers ([`CheckedUint`], [`U1024`], [`U2048`])
//! - Fixed-digit signed decimals ([`BigDecimal`], [`Decimal50`])
//! - Exact rationals ([`BigRational`])
//! - The [`Accumulable`] trait a series result type must implement
//!
//! All arithmetic is checked. Results outside a type's declared range fail
//! with [`ArithmeticError::Overflow`] and never wrap or clamp.
//!
//! The arbitrary-precision arithmetic itself is delegated to `malachite`.

pub mod accumulate;
pub mod checked_uint;
pub mod decimal;
pub mod error;
pub mod rational;

pub use accumulate::Accumulable;
pub use checked_uint::{CheckedUint, U1024, U2048};
pub use decimal::{BigDecimal, Decimal50, MAX_EXPONENT};
pub use error::{ArithmeticError, ArithmeticResult};
pub use rational::BigRational;
