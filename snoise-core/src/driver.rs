//! Sample-rate driver: runs the engine once per frame of an audio block.
//!
//! This is the only code that touches host buffers. It allocates nothing, takes
//! no locks and does not log, so it can run inside an audio callback.

use snoise_utils::noise::{Dimension, MAX_DIMENSIONS, Position};

use crate::engine::NoiseEngine;

/// Position input for one block.
#[derive(Debug, Clone, Copy)]
pub enum SignalBlock<'a> {
    /// One slice per position channel.
    Channels(&'a [&'a [f32]]),
    /// A single channel-major buffer: channel `c`, frame `i` lives at
    /// `c * frames + i` with `frames = samples.len() / channels`.
    Multichannel {
        /// The channel-major samples.
        samples: &'a [f32],
        /// Number of channels packed into `samples`.
        channels: usize,
    },
}

impl SignalBlock<'_> {
    /// Number of position channels offered by the host.
    #[must_use]
    pub const fn channels(&self) -> usize {
        match self {
            Self::Channels(channels) => channels.len(),
            Self::Multichannel { channels, .. } => *channels,
        }
    }

    /// Frames available in every one of the first `used` channels.
    fn frames(&self, used: usize) -> usize {
        match self {
            Self::Channels(channels) => channels[..used]
                .iter()
                .map(|channel| channel.len())
                .min()
                .unwrap_or(usize::MAX),
            Self::Multichannel { samples, channels } => {
                if *channels == 0 {
                    usize::MAX
                } else {
                    samples.len() / channels
                }
            }
        }
    }

    #[inline]
    fn sample(&self, channel: usize, frame: usize) -> f32 {
        match self {
            Self::Channels(channels) => channels[channel][frame],
            Self::Multichannel { samples, channels } => {
                samples[channel * (samples.len() / channels) + frame]
            }
        }
    }
}

/// Persistence input for one block.
#[derive(Debug, Clone, Copy)]
pub enum Persistence<'a> {
    /// A per-frame persistence signal.
    Signal(&'a [f32]),
    /// The same persistence for every frame.
    Constant(f32),
}

impl Persistence<'_> {
    const fn frames(&self) -> usize {
        match self {
            Self::Signal(signal) => signal.len(),
            Self::Constant(_) => usize::MAX,
        }
    }

    #[inline]
    fn at(&self, frame: usize) -> f32 {
        match self {
            Self::Signal(signal) => signal[frame],
            Self::Constant(value) => *value,
        }
    }
}

/// Fills `out` with one noise sample per frame.
///
/// The channel count (clamped to `1..=4`) selects the noise dimension for the
/// whole block; position components past the supplied channels read as zero.
/// Output frames beyond the shortest input are set to zero.
pub fn process_block(
    engine: &NoiseEngine,
    positions: &SignalBlock<'_>,
    persistence: Persistence<'_>,
    out: &mut [f32],
) {
    let dimension = Dimension::from_channels(positions.channels());
    let used = positions.channels().min(dimension.channels());
    let frames = out
        .len()
        .min(positions.frames(used))
        .min(persistence.frames());

    let (active, rest) = out.split_at_mut(frames);
    for (frame, sample) in active.iter_mut().enumerate() {
        let mut pos: Position = [0.0; MAX_DIMENSIONS];
        for (channel, component) in pos.iter_mut().enumerate().take(used) {
            *component = positions.sample(channel, frame);
        }
        *sample = engine.sample(dimension, &pos, persistence.at(frame));
    }
    rest.fill(0.0);
}
