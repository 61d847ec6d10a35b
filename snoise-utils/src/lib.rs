//! Numeric building blocks for the audio-rate simplex noise engine.
//!
//! Everything in this crate is allocation-free once constructed and safe to call
//! from a real-time audio callback:
//!
//! - [`random`] - C-library-compatible seeded generator used to shuffle tables
//! - [`noise`] - permutation table, gradient selectors, simplex evaluators and
//!   the octave compositor
//! - [`math`] - small numeric helpers shared by the evaluators

pub mod math;
pub mod noise;
pub mod random;
