//! Engine, sample-rate driver and control surface for `simplex~`-style
//! audio-rate noise.
//!
//! - [`engine::NoiseEngine`] owns the permutation table and octave settings
//! - [`driver::process_block`] turns position/persistence buffers into output samples
//! - [`command`] parses control messages and creation arguments
//! - [`object::SimplexTilde`] ties them together for a host
//! - [`shared::SharedEngine`] publishes engine snapshots to a separate audio thread

pub mod command;
pub mod driver;
pub mod engine;
pub mod object;
pub mod shared;
