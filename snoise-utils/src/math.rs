//! Math helpers for the noise evaluators.

/// Floor of `x` as an integer lattice coordinate.
///
/// Truncates toward zero and steps down by one when that overshoots, which is
/// cheaper than `f32::floor` followed by a conversion. Inputs outside the `i32`
/// range saturate to `i32::MIN` or `i32::MAX`; NaN maps to `-1`.
#[inline]
#[must_use]
pub const fn fast_floor(x: f32) -> i32 {
    let truncated = x as i32;
    if truncated as f32 <= x {
        truncated
    } else {
        truncated.saturating_sub(1)
    }
}
