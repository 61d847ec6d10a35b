//! Multi-octave summation of simplex noise.
//!
//! Octave `k` samples the noise at `pos * factor[k]` and is weighted by
//! `persistence^k`, accumulated as a running product. With normalization on,
//! the sum is divided by the geometric series `1 + |p| + ... + |p|^(n-1)`.

use crate::noise::{Dimension, PermutationTable, Position};

/// Upper bound on the number of octaves.
pub const MAX_OCTAVES: usize = 24;

/// Octave count, per-octave frequency factors and the normalization switch.
///
/// Only the first [`OctaveConfig::octaves`] factors are read. Factors past that
/// keep whatever value they last had.
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveConfig {
    factors: [f32; MAX_OCTAVES],
    octaves: usize,
    normalize: bool,
}

impl Default for OctaveConfig {
    fn default() -> Self {
        Self::new(1, false)
    }
}

impl OctaveConfig {
    /// Creates a geometric configuration (`factor[k] = 2^k`) with `octaves`
    /// clamped to `1..=MAX_OCTAVES`.
    #[must_use]
    pub fn new(octaves: usize, normalize: bool) -> Self {
        let mut config = Self {
            factors: [0.0; MAX_OCTAVES],
            octaves: 1,
            normalize,
        };
        config.set_octaves(octaves);
        config
    }

    /// Number of octaves summed per sample.
    #[must_use]
    pub const fn octaves(&self) -> usize {
        self.octaves
    }

    /// Frequency factors of the active octaves.
    #[must_use]
    pub fn factors(&self) -> &[f32] {
        &self.factors[..self.octaves]
    }

    /// Whether the octave sum is normalized.
    #[must_use]
    pub const fn normalize(&self) -> bool {
        self.normalize
    }

    /// Enables or disables normalization.
    pub const fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Sets the octave count (clamped to `1..=MAX_OCTAVES`) and resets the
    /// active factors to the doubling series `1, 2, 4, ...`.
    pub fn set_octaves(&mut self, octaves: usize) {
        self.octaves = octaves.clamp(1, MAX_OCTAVES);
        for (octave, factor) in self.factors[..self.octaves].iter_mut().enumerate() {
            *factor = (1u32 << octave) as f32;
        }
    }

    /// Replaces the frequency factors; the octave count becomes their number.
    ///
    /// Factors past [`MAX_OCTAVES`] are dropped. An empty slice leaves the
    /// configuration untouched and returns `false`.
    pub fn set_factors(&mut self, factors: &[f32]) -> bool {
        if factors.is_empty() {
            return false;
        }
        let count = factors.len().min(MAX_OCTAVES);
        self.factors[..count].copy_from_slice(&factors[..count]);
        self.octaves = count;
        true
    }

    /// The divisor applied to the octave sum, or `1.0` when normalization is off.
    #[must_use]
    pub fn normalization(&self, persistence: f32) -> f32 {
        if self.normalize {
            normalization_factor(persistence, self.octaves)
        } else {
            1.0
        }
    }

    /// Sums all octaves of `dimension` noise at `pos`.
    ///
    /// The normalization assumes amplitudes `persistence^k` even when the
    /// factors were replaced through [`OctaveConfig::set_factors`].
    #[inline]
    #[must_use]
    pub fn sample(
        &self,
        perm: &PermutationTable,
        dimension: Dimension,
        pos: &Position,
        persistence: f32,
    ) -> f32 {
        let mut result = 0.0f32;
        let mut amplitude = 1.0f32;
        for (octave, &scale) in self.factors().iter().enumerate() {
            // First octave is not attenuated
            if octave > 0 {
                amplitude *= persistence;
            }
            result += amplitude * dimension.evaluate(pos, scale, perm);
        }
        result * self.normalization(persistence)
    }
}

/// Reciprocal of the geometric series `sum(|p|^k, k = 0..octaves)`.
///
/// Evaluates the closed form `(|p| - 1) / (|p|^octaves - 1)`, falling back to
/// `1 / octaves` at `|p| == 1`. The power is taken in double precision.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn normalization_factor(persistence: f32, octaves: usize) -> f32 {
    let magnitude = persistence.abs();
    if magnitude == 1.0 {
        1.0 / octaves as f32
    } else {
        let numerator = f64::from(magnitude - 1.0);
        (numerator / (f64::from(magnitude).powf(octaves as f64) - 1.0)) as f32
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const ALL: [Dimension; 4] = [
        Dimension::One,
        Dimension::Two,
        Dimension::Three,
        Dimension::Four,
    ];

    #[test]
    fn test_default_is_single_plain_octave() {
        let config = OctaveConfig::default();
        assert_eq!(config.octaves(), 1);
        assert_eq!(config.factors(), &[1.0]);
        assert!(!config.normalize());
    }

    #[test]
    fn test_geometric_factors() {
        let config = OctaveConfig::new(5, false);
        assert_eq!(config.factors(), &[1.0, 2.0, 4.0, 8.0, 16.0]);

        let config = OctaveConfig::new(MAX_OCTAVES, false);
        assert_eq!(config.factors()[23], 8_388_608.0);
    }

    #[test]
    fn test_octave_count_is_clamped() {
        let mut config = OctaveConfig::default();
        config.set_octaves(0);
        assert_eq!(config.octaves(), 1);
        config.set_octaves(100);
        assert_eq!(config.octaves(), MAX_OCTAVES);
    }

    #[test]
    fn test_set_factors() {
        let mut config = OctaveConfig::new(4, false);
        assert!(config.set_factors(&[1.0, 3.0, 9.0]));
        assert_eq!(config.factors(), &[1.0, 3.0, 9.0]);

        assert!(!config.set_factors(&[]));
        assert_eq!(config.octaves(), 3);

        let many = [1.5f32; 30];
        assert!(config.set_factors(&many));
        assert_eq!(config.octaves(), MAX_OCTAVES);
    }

    #[test]
    fn test_inactive_factors_are_kept() {
        let mut config = OctaveConfig::default();
        config.set_factors(&[1.0, 3.0, 5.0, 7.0]);
        config.set_factors(&[2.0]);
        assert_eq!(config.factors(), &[2.0]);
        assert_eq!(config.factors[..4], [2.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_normalization_identity() {
        for (p, n) in [(0.5f32, 4usize), (0.25, 1), (2.0, 3), (-0.5, 6), (0.9, 24)] {
            let magnitude = f64::from(p.abs());
            let expected = ((magnitude - 1.0) / (magnitude.powi(n as i32) - 1.0)) as f32;
            let actual = normalization_factor(p, n);
            assert!(
                (actual - expected).abs() <= expected.abs() * 1e-6,
                "p={p} n={n}: {actual} vs {expected}"
            );
        }
        assert_eq!(normalization_factor(0.5, 4), 8.0 / 15.0);
    }

    #[test]
    fn test_normalization_unit_persistence() {
        assert_eq!(normalization_factor(1.0, 4), 0.25);
        assert_eq!(normalization_factor(-1.0, 5), 0.2);
        assert_eq!(normalization_factor(1.0, 1), 1.0);
    }

    #[test]
    fn test_normalization_disabled() {
        let config = OctaveConfig::new(8, false);
        assert_eq!(config.normalization(0.5), 1.0);
    }

    #[test]
    fn test_zero_persistence_keeps_first_octave_only() {
        let perm = PermutationTable::from_seed(42);
        let single = OctaveConfig::new(1, false);
        let pos = [0.61, -2.4, 1.75, 3.3];
        for octaves in [2, 5, 24] {
            for normalize in [false, true] {
                let config = OctaveConfig::new(octaves, normalize);
                for dim in ALL {
                    assert_eq!(
                        config.sample(&perm, dim, &pos, 0.0),
                        single.sample(&perm, dim, &pos, 0.0)
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_octave_equals_evaluator() {
        let perm = PermutationTable::from_seed(9);
        let config = OctaveConfig::new(1, true);
        let pos = [1.1, 2.2, 3.3, 4.4];
        for dim in ALL {
            assert_eq!(
                config.sample(&perm, dim, &pos, 0.7),
                dim.evaluate(&pos, 1.0, &perm)
            );
        }
    }

    #[test]
    fn test_recorded_octave_sum() {
        // Seed 42, 4 normalized octaves, persistence 0.5, recorded from the `simplex~` Pd external
        let perm = PermutationTable::from_seed(42);
        let config = OctaveConfig::new(4, true);
        let pos = [0.3, -1.7, 2.25, 0.8];
        let expected = [0x3d6d_78d8, 0xbc74_545f, 0xbcfc_e5f0, 0x3eac_68eb];
        for (dim, bits) in ALL.into_iter().zip(expected) {
            assert_eq!(config.sample(&perm, dim, &pos, 0.5).to_bits(), bits, "{dim:?}");
        }
    }

    #[test]
    fn test_far_negative_positions_do_not_panic() {
        // 24 octaves scale -300 past i32::MIN at the highest factor
        let perm = PermutationTable::from_seed(42);
        let config = OctaveConfig::new(MAX_OCTAVES, true);
        for dim in ALL {
            let far = config.sample(&perm, dim, &[-300.0; 4], 0.5);
            // Saturated lattice cells put every kernel out of reach; the 1D
            // kernel has no clamp, so only 2D and up stay finite
            if dim != Dimension::One {
                assert!(far.is_finite(), "{dim:?}: {far}");
            }
            let _ = config.sample(&perm, dim, &[f32::NEG_INFINITY; 4], 0.5);
            let _ = dim.evaluate(&[f32::NEG_INFINITY, 0.0, 0.0, 0.0], 1.0, &perm);
        }
    }

    #[test]
    fn test_normalization_ignores_custom_factors() {
        let perm = PermutationTable::from_seed(42);
        let mut config = OctaveConfig::new(4, true);
        assert!(config.set_factors(&[1.0, 3.0]));

        let pos = [0.3, -1.7, 2.25, 0.8];
        let p = 0.5f32;
        for dim in ALL {
            let a = dim.evaluate(&pos, 1.0, &perm);
            let b = dim.evaluate(&pos, 3.0, &perm);
            let expected = (a + p * b) * normalization_factor(p, 2);
            assert_eq!(config.sample(&perm, dim, &pos, p), expected, "{dim:?}");
        }
    }

    #[test]
    fn test_origin_is_zero_for_all_octaves() {
        let perm = PermutationTable::from_seed(42);
        let config = OctaveConfig::new(6, true);
        for dim in ALL {
            assert_eq!(config.sample(&perm, dim, &[0.0; 4], 0.5), 0.0);
        }
    }
}
