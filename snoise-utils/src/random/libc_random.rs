//! The C library's `rand()` generator (additive feedback, degree 31).
//!
//! `srand(seed)` fills 31 words with the Park-Miller minimal standard recurrence,
//! then 310 outputs are thrown away. Every output is `state[f] += state[r]`
//! (wrapping) shifted right by one, with the two cursors three words apart.

use crate::random::Random;

const DEGREE: usize = 31;
const SEPARATION: usize = 3;
/// Outputs discarded after seeding, ten times the degree.
const WARM_UP: usize = DEGREE * 10;

/// Park-Miller constants for Schrage's overflow-free `16807 * x % (2^31 - 1)`.
const MULTIPLIER: i64 = 16807;
const MODULUS: i32 = 2_147_483_647;
const QUOTIENT: i32 = 127_773;
const REMAINDER: i64 = 2836;

/// Seedable generator producing the same sequence as `srand(seed); rand()`.
#[derive(Debug, Clone)]
pub struct LibcRandom {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl LibcRandom {
    /// Creates a generator seeded like `srand(seed)`.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        // A zero seed would lock the recurrence at zero.
        let seed = if seed == 0 { 1 } else { seed };

        let mut state = [0u32; DEGREE];
        state[0] = seed;
        let mut word = seed as i32;
        for slot in state.iter_mut().skip(1) {
            let hi = word / QUOTIENT;
            let lo = word % QUOTIENT;
            word = (MULTIPLIER * i64::from(lo) - REMAINDER * i64::from(hi)) as i32;
            if word < 0 {
                word = word.wrapping_add(MODULUS);
            }
            *slot = word as u32;
        }

        let mut rng = Self {
            state,
            front: SEPARATION,
            rear: 0,
        };
        rng.consume_count(WARM_UP);
        rng
    }

    /// Returns the next 31-bit output.
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        let sum = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = sum;

        self.front += 1;
        self.rear += 1;
        if self.front == DEGREE {
            self.front = 0;
        } else if self.rear == DEGREE {
            self.rear = 0;
        }

        sum >> 1
    }
}

impl Random for LibcRandom {
    #[inline]
    fn next_i32(&mut self) -> i32 {
        self.next_u31() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_outputs(seed: u32) -> [u32; 5] {
        let mut rng = LibcRandom::from_seed(seed);
        std::array::from_fn(|_| rng.next_u31())
    }

    #[test]
    fn test_matches_srand_1() {
        assert_eq!(
            first_outputs(1),
            [1_804_289_383, 846_930_886, 1_681_692_777, 1_714_636_915, 1_957_747_793]
        );
    }

    #[test]
    fn test_matches_srand_42() {
        assert_eq!(
            first_outputs(42),
            [71_876_166, 708_592_740, 1_483_128_881, 907_283_241, 442_951_012]
        );
    }

    #[test]
    fn test_zero_seed_behaves_like_one() {
        assert_eq!(first_outputs(0), first_outputs(1));
    }

    #[test]
    fn test_seeds_above_i32_max() {
        let mut rng = LibcRandom::from_seed(4_000_000_000);
        assert_eq!(rng.next_u31(), 1_111_130_805);
        assert_eq!(rng.next_u31(), 1_380_198_982);

        let mut rng = LibcRandom::from_seed(u32::MAX);
        assert_eq!(rng.next_u31(), 254_925_627);

        let mut rng = LibcRandom::from_seed(2_147_483_648);
        assert_eq!(rng.next_u31(), 1_336_741_213);
    }

    #[test]
    fn test_outputs_are_31_bit() {
        let mut rng = LibcRandom::from_seed(7);
        for _ in 0..10_000 {
            assert!(rng.next_i32() >= 0);
        }
    }

    #[test]
    fn test_bounded_stays_in_range() {
        let mut rng = LibcRandom::from_seed(99);
        for bound in 1..=256 {
            let v = rng.next_i32_bounded(bound);
            assert!((0..bound).contains(&v));
        }
    }
}
