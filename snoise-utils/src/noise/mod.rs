//! Audio-rate simplex noise.
//!
//! This module provides the noise generation primitives evaluated once per sample:
//!
//! - [`PermutationTable`] - Seeded 512-entry hash table shared by every evaluator
//! - [`gradient`] - Hash-to-gradient dot products for 1 to 4 dimensions
//! - [`simplex_1d`] .. [`simplex_4d`] - Single-octave simplex evaluators
//! - [`OctaveConfig`] - Multi-octave summation with optional normalization
//!
//! [`Dimension`] selects which evaluator runs; it is fixed for a whole audio block.

pub mod gradient;
mod octave;
mod permutation;
mod simplex_noise;

pub use octave::{MAX_OCTAVES, OctaveConfig, normalization_factor};
pub use permutation::{PERMUTATION_SIZE, PermutationTable};
pub use simplex_noise::{simplex_1d, simplex_2d, simplex_3d, simplex_4d};

/// Highest supported noise dimensionality.
pub const MAX_DIMENSIONS: usize = 4;

/// A sample position. Components past the active [`Dimension`] are ignored.
pub type Position = [f32; MAX_DIMENSIONS];

/// Dimensionality of the simplex evaluator used for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// 1D simplex noise over `x`.
    One,
    /// 2D simplex noise over `x, y`.
    Two,
    /// 3D simplex noise over `x, y, z`.
    Three,
    /// 4D simplex noise over `x, y, z, w`.
    Four,
}

impl Dimension {
    /// Picks the dimension for a given number of position channels.
    ///
    /// The count is clamped to `1..=4`: zero channels still evaluates 1D noise,
    /// and channels beyond the fourth are ignored.
    #[must_use]
    pub const fn from_channels(channels: usize) -> Self {
        match channels {
            0 | 1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::Four,
        }
    }

    /// Number of position components read by this dimension.
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Evaluates one octave of noise at `pos * scale`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, pos: &Position, scale: f32, perm: &PermutationTable) -> f32 {
        match self {
            Self::One => simplex_1d(pos, scale, perm),
            Self::Two => simplex_2d(pos, scale, perm),
            Self::Three => simplex_3d(pos, scale, perm),
            Self::Four => simplex_4d(pos, scale, perm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count_is_clamped() {
        assert_eq!(Dimension::from_channels(0), Dimension::One);
        assert_eq!(Dimension::from_channels(1), Dimension::One);
        assert_eq!(Dimension::from_channels(3), Dimension::Three);
        assert_eq!(Dimension::from_channels(4), Dimension::Four);
        assert_eq!(Dimension::from_channels(16), Dimension::Four);
    }

    #[test]
    fn test_channels_round_trip() {
        for channels in 1..=MAX_DIMENSIONS {
            assert_eq!(Dimension::from_channels(channels).channels(), channels);
        }
    }
}
