//! Seeded pseudo-random sources for table construction.
//!
//! Only [`libc_random::LibcRandom`] is provided: it reproduces the C library's
//! `srand`/`rand` pair so that a given seed shuffles the permutation table the
//! same way existing patches expect.

pub mod libc_random;

use std::time::{SystemTime, UNIX_EPOCH};

/// A deterministic source of random integers.
pub trait Random {
    /// Returns the next non-negative value in `0..=i32::MAX`.
    fn next_i32(&mut self) -> i32;

    /// Returns a value in `0..bound` by reducing [`Random::next_i32`] modulo `bound`.
    ///
    /// The modulo bias is kept on purpose: table shuffles must match the C
    /// library's `rand() % n`.
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        self.next_i32() % bound
    }

    /// Advances the generator by `count` outputs.
    fn consume_count(&mut self, count: usize) {
        for _ in 0..count {
            self.next_i32();
        }
    }
}

/// Derives a seed from the nanosecond part of the current clock reading.
///
/// Two calls a few microseconds apart produce different seeds, which is all the
/// unseeded table rebuild needs.
#[must_use]
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.subsec_nanos())
}
