//! Gradient selection: the low bits of a corner hash pick one of a fixed set of
//! gradient directions, and the result is that gradient dotted with the offset.
//!
//! The bit layouts are what give the noise its character; changing any of them
//! changes every output sample.

/// 1D gradient magnitudes, indexed by `hash & 15`.
const GRADIENT_1D: [i8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, -1, -2, -3, -4, -5, -6, -7, -8];

/// 1D gradient: one of `±1..=±8` times `x`.
#[inline]
#[must_use]
pub fn grad_1d(hash: u8, x: f32) -> f32 {
    f32::from(GRADIENT_1D[usize::from(hash & 15)]) * x
}

/// 2D gradient: 8 directions from `hash & 7`, one axis weighted twice the other.
#[inline]
#[must_use]
pub fn grad_2d(hash: u8, x: f32, y: f32) -> f32 {
    let h = hash & 7;
    let (u, v) = if h < 4 { (x, y) } else { (y, x) };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { 2.0 * v } else { -2.0 * v };
    u + v
}

/// 3D gradient: 12 cube edge directions from `hash & 15`.
///
/// Hashes 12 and 14 reuse `x` as the second axis so the four surplus values
/// repeat existing directions instead of adding degenerate ones.
#[inline]
#[must_use]
pub fn grad_3d(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// 4D gradient: 32 hypercube edge directions from `hash & 31`, each combining
/// three of the four axes with independent signs.
#[inline]
#[must_use]
pub fn grad_4d(hash: u8, x: f32, y: f32, z: f32, w: f32) -> f32 {
    let h = hash & 31;
    let u = if h < 24 { x } else { y };
    let v = if h < 16 { y } else { z };
    let t = if h < 8 { z } else { w };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    let t = if h & 4 == 0 { t } else { -t };
    u + v + t
}
