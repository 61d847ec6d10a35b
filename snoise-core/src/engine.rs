//! The noise engine: one permutation table plus one octave configuration.

use snoise_utils::noise::{Dimension, OctaveConfig, PermutationTable, Position};

use crate::command::ControlCommand;

/// Initial engine state, usually derived from creation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Explicit table seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Octave count, clamped to `1..=MAX_OCTAVES` when applied.
    pub octaves: usize,
    /// Whether octave sums are normalized.
    pub normalize: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: None,
            octaves: 1,
            normalize: false,
        }
    }
}

/// The per-instance noise state evaluated by the audio driver.
///
/// Each engine owns its table; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct NoiseEngine {
    perm: PermutationTable,
    octaves: OctaveConfig,
}

impl NoiseEngine {
    /// Builds an engine from `settings`.
    #[must_use]
    pub fn new(settings: &EngineSettings) -> Self {
        let perm = settings
            .seed
            .map_or_else(PermutationTable::from_clock, PermutationTable::from_seed);
        Self {
            perm,
            octaves: OctaveConfig::new(settings.octaves, settings.normalize),
        }
    }

    /// The permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// The octave configuration.
    #[must_use]
    pub const fn octave_config(&self) -> &OctaveConfig {
        &self.octaves
    }

    /// Rebuilds the permutation table from `seed`, or from the clock.
    pub fn reseed(&mut self, seed: Option<u32>) {
        self.perm.rebuild(seed);
    }

    /// Enables or disables octave normalization.
    pub fn set_normalize(&mut self, normalize: bool) {
        self.octaves.set_normalize(normalize);
        log::debug!("Normalization {}", if normalize { "on" } else { "off" });
    }

    /// Replaces the per-octave frequency factors. Returns `false` for an empty list.
    pub fn set_coefficients(&mut self, factors: &[f32]) -> bool {
        let applied = self.octaves.set_factors(factors);
        if applied {
            log::debug!("Octave factors set to {:?}", self.octaves.factors());
        }
        applied
    }

    /// Sets the octave count and restores the doubling frequency series.
    pub fn set_octaves(&mut self, octaves: usize) {
        self.octaves.set_octaves(octaves);
        log::debug!("Octaves set to {}", self.octaves.octaves());
    }

    /// Applies an engine-level control command.
    ///
    /// [`ControlCommand::Persistence`] is host state and is ignored here.
    pub fn apply(&mut self, command: &ControlCommand) {
        match command {
            ControlCommand::Seed(seed) => self.reseed(*seed),
            ControlCommand::Normalize(normalize) => self.set_normalize(*normalize),
            ControlCommand::Coefficients(factors) => {
                self.set_coefficients(factors);
            }
            ControlCommand::Octaves(octaves) => self.set_octaves(*octaves),
            ControlCommand::Persistence(_) => {}
        }
    }

    /// Evaluates one output sample.
    #[inline]
    #[must_use]
    pub fn sample(&self, dimension: Dimension, pos: &Position, persistence: f32) -> f32 {
        self.octaves.sample(&self.perm, dimension, pos, persistence)
    }
}
