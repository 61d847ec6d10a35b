//! Single-octave simplex noise in 1 to 4 dimensions.
//!
//! Each evaluator skews the scaled position onto the simplex lattice, finds the
//! enclosing simplex and its corner order, then sums a `(0.5 - r²)^4` falloff
//! times the corner gradient for every corner. Results stay close to `[-1, 1]`.
//!
//! All arithmetic is `f32` and the operation order is fixed: existing patches
//! depend on the exact output values.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::math::fast_floor;
use crate::noise::gradient::{grad_1d, grad_2d, grad_3d, grad_4d};
use crate::noise::{PermutationTable, Position};

/// Skewing factor for 2D: `0.5 * (sqrt(3) - 1)`
const F2: f32 = 0.36602540378;
/// Unskewing factor for 2D: `(3 - sqrt(3)) / 6`
const G2: f32 = 0.2113248654;
const G2_2: f32 = 0.42264973081;

/// Skewing factor for 3D: `1/3`
const F3: f32 = 0.33333333333;
/// Unskewing factor for 3D: `1/6`
const G3: f32 = 0.16666666666;
const G3_2: f32 = 0.33333333333;
const G3_3: f32 = 0.5;

/// Skewing factor for 4D: `(sqrt(5) - 1) / 4`
const F4: f32 = 0.30901699437;
/// Unskewing factor for 4D: `(5 - sqrt(5)) / 20`
const G4: f32 = 0.13819660112;
const G4_2: f32 = 0.27639320225;
const G4_3: f32 = 0.41458980337;
const G4_4: f32 = 0.5527864045;

/// Output scale for each dimension.
const SCALE_1D: f64 = 0.395;
const SCALE_2D: f32 = 40.0;
const SCALE_3D: f32 = 72.0;
const SCALE_4D: f32 = 62.0;

/// 3D corner offsets `(i1, j1, k1, i2, j2, k2)`, indexed by
/// `(x0 >= y0) * 4 + (y0 >= z0) * 2 + (x0 >= z0)`. Rows 1 and 6 are unreachable.
const SIMPLEX_3D: [[u8; 6]; 8] = [
    [0, 0, 1, 0, 1, 1], // ZYX
    [0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 1, 1], // YZX
    [0, 1, 0, 1, 1, 0], // YXZ
    [0, 0, 1, 1, 0, 1], // ZXY
    [1, 0, 0, 1, 0, 1], // XZY
    [0, 0, 0, 0, 0, 0],
    [1, 0, 0, 1, 1, 0], // XYZ
];

/// 4D corner traversal. Each reachable row holds the rank (0..=3) of every axis
/// in the magnitude ordering of the cell offset; only 24 of the 64 comparison
/// patterns are consistent, the rest are zero.
#[rustfmt::skip]
const SIMPLEX_4D: [[u8; 4]; 64] = [
    [0,1,2,3], [0,1,3,2], [0,0,0,0], [0,2,3,1], [0,0,0,0], [0,0,0,0], [0,0,0,0], [1,2,3,0],
    [0,2,1,3], [0,0,0,0], [0,3,1,2], [0,3,2,1], [0,0,0,0], [0,0,0,0], [0,0,0,0], [1,3,2,0],
    [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0],
    [1,2,0,3], [0,0,0,0], [1,3,0,2], [0,0,0,0], [0,0,0,0], [0,0,0,0], [2,3,0,1], [2,3,1,0],
    [1,0,2,3], [1,0,3,2], [0,0,0,0], [0,0,0,0], [0,0,0,0], [2,0,3,1], [0,0,0,0], [2,1,3,0],
    [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0], [0,0,0,0],
    [2,0,1,3], [0,0,0,0], [0,0,0,0], [0,0,0,0], [3,0,1,2], [3,0,2,1], [0,0,0,0], [3,1,2,0],
    [2,1,0,3], [0,0,0,0], [0,0,0,0], [0,0,0,0], [3,1,0,2], [0,0,0,0], [3,2,0,1], [3,2,1,0],
];

/// Wraps a lattice coordinate into the permutation table.
#[inline]
const fn wrap(i: i32) -> usize {
    (i & 0xFF) as usize
}

/// `max(0, t)^4`. The clamp happens before squaring so far corners add nothing.
#[inline]
fn falloff(t: f32) -> f32 {
    let t = t.max(0.0);
    let t = t * t;
    t * t
}

#[inline]
fn corner_2d(hash: u8, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    falloff(t) * grad_2d(hash, x, y)
}

#[inline]
fn corner_3d(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let t = 0.5 - x * x - y * y - z * z;
    falloff(t) * grad_3d(hash, x, y, z)
}

#[inline]
fn corner_4d(hash: u8, x: f32, y: f32, z: f32, w: f32) -> f32 {
    let t = 0.5 - x * x - y * y - z * z - w * w;
    falloff(t) * grad_4d(hash, x, y, z, w)
}

/// 1D simplex noise at `pos[0] * scale`.
///
/// Uses a radius-1 kernel `(1 - x²)^4`; both corner offsets lie in `[-1, 1]`
/// so no clamp is needed.
#[must_use]
pub fn simplex_1d(pos: &Position, scale: f32, perm: &PermutationTable) -> f32 {
    let x = scale * pos[0];

    let i0 = fast_floor(x);
    let i1 = i0.wrapping_add(1);
    let x0 = x - i0 as f32;
    let x1 = x0 - 1.0;

    let mut t0 = 1.0 - x0 * x0;
    t0 *= t0;
    let n0 = t0 * t0 * grad_1d(perm.hash_1d(wrap(i0)), x0);

    let mut t1 = 1.0 - x1 * x1;
    t1 *= t1;
    let n1 = t1 * t1 * grad_1d(perm.hash_1d(wrap(i1)), x1);

    // The 1D scale is applied in double precision
    (SCALE_1D * f64::from(n0 + n1)) as f32
}

/// 2D simplex noise at `pos[..2] * scale`.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn simplex_2d(pos: &Position, scale: f32, perm: &PermutationTable) -> f32 {
    let x = scale * pos[0];
    let y = scale * pos[1];

    // Skew the input space to find the containing cell
    let s = (x + y) * F2;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);

    let t = i.wrapping_add(j) as f32 * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    // Lower triangle (1, 0) or upper triangle (0, 1)
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + G2_2;
    let y2 = y0 - 1.0 + G2_2;

    let ii = wrap(i);
    let jj = wrap(j);

    let n0 = corner_2d(perm.hash_2d(ii, jj), x0, y0);
    let n1 = corner_2d(perm.hash_2d(ii + i1, jj + j1), x1, y1);
    let n2 = corner_2d(perm.hash_2d(ii + 1, jj + 1), x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

/// 3D simplex noise at `pos[..3] * scale`.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn simplex_3d(pos: &Position, scale: f32, perm: &PermutationTable) -> f32 {
    let x = scale * pos[0];
    let y = scale * pos[1];
    let z = scale * pos[2];

    let s = (x + y + z) * F3;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);

    let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);

    // Pick one of the six tetrahedra in the skewed cube
    let c = usize::from(x0 >= y0) * 4 + usize::from(y0 >= z0) * 2 + usize::from(x0 >= z0);
    let [i1, j1, k1, i2, j2, k2] = SIMPLEX_3D[c].map(usize::from);

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + G3_2;
    let y2 = y0 - j2 as f32 + G3_2;
    let z2 = z0 - k2 as f32 + G3_2;
    let x3 = x0 - 1.0 + G3_3;
    let y3 = y0 - 1.0 + G3_3;
    let z3 = z0 - 1.0 + G3_3;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);

    let n0 = corner_3d(perm.hash_3d(ii, jj, kk), x0, y0, z0);
    let n1 = corner_3d(perm.hash_3d(ii + i1, jj + j1, kk + k1), x1, y1, z1);
    let n2 = corner_3d(perm.hash_3d(ii + i2, jj + j2, kk + k2), x2, y2, z2);
    let n3 = corner_3d(perm.hash_3d(ii + 1, jj + 1, kk + 1), x3, y3, z3);

    SCALE_3D * (n0 + n1 + n2 + n3)
}

/// 4D simplex noise at `pos * scale`.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn simplex_4d(pos: &Position, scale: f32, perm: &PermutationTable) -> f32 {
    let x = scale * pos[0];
    let y = scale * pos[1];
    let z = scale * pos[2];
    let w = scale * pos[3];

    // Skew to find which of the 24 simplices of the cell we are in
    let s = (x + y + z + w) * F4;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);
    let l = fast_floor(w + s);

    let t = i.wrapping_add(j).wrapping_add(k).wrapping_add(l) as f32 * G4;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);
    let w0 = w - (l as f32 - t);

    // Six pairwise comparisons form the traversal index
    let c = (usize::from(x0 > y0) << 5)
        | (usize::from(x0 > z0) << 4)
        | (usize::from(y0 > z0) << 3)
        | (usize::from(x0 > w0) << 2)
        | (usize::from(y0 > w0) << 1)
        | usize::from(z0 > w0);
    let rank = SIMPLEX_4D[c];

    // Corner n steps along every axis whose rank exceeds 3 - n
    let [i1, j1, k1, l1] = rank.map(|r| usize::from(r > 2));
    let [i2, j2, k2, l2] = rank.map(|r| usize::from(r > 1));
    let [i3, j3, k3, l3] = rank.map(|r| usize::from(r > 0));

    let x1 = x0 - i1 as f32 + G4;
    let y1 = y0 - j1 as f32 + G4;
    let z1 = z0 - k1 as f32 + G4;
    let w1 = w0 - l1 as f32 + G4;
    let x2 = x0 - i2 as f32 + G4_2;
    let y2 = y0 - j2 as f32 + G4_2;
    let z2 = z0 - k2 as f32 + G4_2;
    let w2 = w0 - l2 as f32 + G4_2;
    let x3 = x0 - i3 as f32 + G4_3;
    let y3 = y0 - j3 as f32 + G4_3;
    let z3 = z0 - k3 as f32 + G4_3;
    let w3 = w0 - l3 as f32 + G4_3;
    let x4 = x0 - 1.0 + G4_4;
    let y4 = y0 - 1.0 + G4_4;
    let z4 = z0 - 1.0 + G4_4;
    let w4 = w0 - 1.0 + G4_4;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let ll = wrap(l);

    let n0 = corner_4d(perm.hash_4d(ii, jj, kk, ll), x0, y0, z0, w0);
    let n1 = corner_4d(
        perm.hash_4d(ii + i1, jj + j1, kk + k1, ll + l1),
        x1,
        y1,
        z1,
        w1,
    );
    let n2 = corner_4d(
        perm.hash_4d(ii + i2, jj + j2, kk + k2, ll + l2),
        x2,
        y2,
        z2,
        w2,
    );
    let n3 = corner_4d(
        perm.hash_4d(ii + i3, jj + j3, kk + k3, ll + l3),
        x3,
        y3,
        z3,
        w3,
    );
    let n4 = corner_4d(perm.hash_4d(ii + 1, jj + 1, kk + 1, ll + 1), x4, y4, z4, w4);

    SCALE_4D * (n0 + n1 + n2 + n3 + n4)
}
