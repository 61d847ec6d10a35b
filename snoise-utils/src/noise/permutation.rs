//! Seeded permutation table used to hash lattice coordinates.

use crate::random::libc_random::LibcRandom;
use crate::random::{Random, clock_seed};

/// Number of distinct hash values; the table holds two copies of a permutation of `0..256`.
pub const PERMUTATION_SIZE: usize = 256;

/// A 512-entry permutation table: a shuffled `0..256` followed by a verbatim copy.
///
/// The mirrored half lets evaluators index with `lattice & 0xFF` plus a small
/// offset (at most 256 after chaining) without wrapping again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    /// Builds the table for `seed`. The same seed always yields the same table.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        let mut table = Self {
            p: [0; PERMUTATION_SIZE * 2],
        };
        table.fill(seed);
        table
    }

    /// Builds the table from a clock-derived seed.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Replaces the whole table. `None` reseeds from the clock.
    pub fn rebuild(&mut self, seed: Option<u32>) {
        let seed = seed.unwrap_or_else(clock_seed);
        self.fill(seed);
        log::debug!("Permutation table rebuilt with seed {seed}");
    }

    /// Shuffles into a scratch permutation first so the table is only written
    /// once the shuffle is complete.
    fn fill(&mut self, seed: u32) {
        let mut base: [u8; PERMUTATION_SIZE] = std::array::from_fn(|i| i as u8);

        // Fisher-Yates from the top, matching `rand() % (i + 1)`
        let mut rng = LibcRandom::from_seed(seed);
        for i in (1..PERMUTATION_SIZE).rev() {
            let j = rng.next_i32_bounded(i as i32 + 1) as usize;
            base.swap(i, j);
        }

        let (low, high) = self.p.split_at_mut(PERMUTATION_SIZE);
        low.copy_from_slice(&base);
        high.copy_from_slice(&base);
    }

    /// All 512 entries.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8; PERMUTATION_SIZE * 2] {
        &self.p
    }

    /// Hash of a single wrapped lattice coordinate.
    #[inline]
    #[must_use]
    pub const fn hash_1d(&self, i: usize) -> u8 {
        self.p[i]
    }

    /// Chained hash `perm[i + perm[j]]`.
    #[inline]
    #[must_use]
    pub fn hash_2d(&self, i: usize, j: usize) -> u8 {
        self.p[i + usize::from(self.p[j])]
    }

    /// Chained hash `perm[i + perm[j + perm[k]]]`.
    #[inline]
    #[must_use]
    pub fn hash_3d(&self, i: usize, j: usize, k: usize) -> u8 {
        self.p[i + usize::from(self.hash_2d(j, k))]
    }

    /// Chained hash `perm[i + perm[j + perm[k + perm[l]]]]`.
    #[inline]
    #[must_use]
    pub fn hash_4d(&self, i: usize, j: usize, k: usize, l: usize) -> u8 {
        self.p[i + usize::from(self.hash_3d(j, k, l))]
    }
}
