//! Stopwatch Module
//!
//! Provides a stopwatch which starts as soon as it is created. It can be read
//! any number of times; every reading is the time since creation.

use std::time::{Duration, Instant};

/// Source of elapsed time since a fixed start instant
pub trait ElapsedMicros {
    /// Microseconds since the start instant, monotonic
    fn elapsed_micros(&self) -> u64;
}

/// Stopwatch implementation
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Create a stopwatch, started now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since creation
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl ElapsedMicros for Stopwatch {
    fn elapsed_micros(&self) -> u64 {
        // u64 microseconds cover half a million years
        u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Run `f` and return its output with the elapsed microseconds
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let watch = Stopwatch::start();
    let output = f();
    (output, watch.elapsed_micros())
}
