//! Adapters Layer: Number Source
//!
//! Supplies the wide unsigned integers the square root solvers work on,
//! either drawn at random or typed in by the user.
//!
//! ## Modules
//!
//! - **[`random`](random/index.html)**: [`RandomSource`], uniform over `[2^1000, max]`
//! - **[`prompt`](prompt/index.html)**: [`PromptSource`], yes/no prompt with a fallback
//! - **[`error`](error/index.html)**: [`SourceError`]

pub mod error;
pub mod prompt;
pub mod random;

pub use error::{SourceError, SourceResult};
pub use prompt::PromptSource;
pub use random::{RandomSource, LOWER_BOUND_EXPONENT};

use entities_numerics::CheckedUint;

/// Something that can hand out a number of any width
pub trait NumberSource {
    fn next_number<const BITS: u64>(&mut self) -> SourceResult<CheckedUint<BITS>>;
}

impl<S: NumberSource> NumberSource for &mut S {
    fn next_number<const BITS: u64>(&mut self) -> SourceResult<CheckedUint<BITS>> {
        (**self).next_number()
    }
}
