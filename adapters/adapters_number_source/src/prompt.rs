//! Interactive Number Source Module
//!
//! Asks whether the user wants to type a number. A yes answer reads a decimal
//! or `0x` hex literal; anything else falls back to another source, normally
//! a [`RandomSource`](crate::RandomSource).

use std::io::{BufRead, Write};

use entities_numerics::CheckedUint;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::NumberSource;

/// Prompt on a writer, read answers from a reader
pub struct PromptSource<R, W, F> {
    reader: R,
    writer: W,
    fallback: F,
}

impl<R: BufRead, W: Write, F: NumberSource> PromptSource<R, W, F> {
    pub fn new(reader: R, writer: W, fallback: F) -> Self {
        Self {
            reader,
            writer,
            fallback,
        }
    }

    /// Ask for a number
    ///
    /// `Ok(None)` when the user declines or input has already ended.
    pub fn ask<const BITS: u64>(&mut self) -> SourceResult<Option<CheckedUint<BITS>>> {
        writeln!(
            self.writer,
            "Would you like to enter {} bit number yourself?",
            BITS
        )?;
        self.writer.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        if !matches!(answer.trim_start().chars().next(), Some('y' | 'Y')) {
            return Ok(None);
        }

        write!(self.writer, "Enter the number : ")?;
        self.writer.flush()?;
        let literal = self.read_line()?.ok_or(SourceError::UnexpectedEof)?;
        let number = literal.parse()?;
        Ok(Some(number))
    }

    pub fn into_parts(self) -> (R, W, F) {
        (self.reader, self.writer, self.fallback)
    }

    fn read_line(&mut self) -> SourceResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write, F: NumberSource> NumberSource for PromptSource<R, W, F> {
    fn next_number<const BITS: u64>(&mut self) -> SourceResult<CheckedUint<BITS>> {
        match self.ask()? {
            Some(number) => Ok(number),
            None => {
                debug!("no number entered, using fallback source");
                self.fallback.next_number()
            }
        }
    }
}
