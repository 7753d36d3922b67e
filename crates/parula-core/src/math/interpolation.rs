//! Interpolation functions for table lookup
//!
//! This module provides:
//! - Linear interpolation (1D)
//! - Splitting a unit factor into a table row and a fractional weight

/// Linear interpolation between two values
///
/// Returns `a * (1 - t) + b * t`. This form returns `a` exactly at `t = 0`
/// and `b` exactly at `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Linear interpolation for 4-component vectors
#[inline]
pub fn lerp4(a: [f64; 4], b: [f64; 4], t: f64) -> [f64; 4] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

/// Clamp a factor to [0, 1], sending NaN to 0
#[inline]
pub fn clamp_unit(f: f64) -> f64 {
    if f.is_nan() { 0.0 } else { f.clamp(0.0, 1.0) }
}

/// Position of a factor within a table whose last row is `last`
///
/// Returns `(i, t)` with `i = floor(clamp(f) * last)` and `t` the fractional
/// remainder. When `i == last`, `t` is 0 and no upper neighbour exists.
#[inline]
pub fn table_position(f: f64, last: usize) -> (usize, f64) {
    let pos = clamp_unit(f) * last as f64;
    let i = pos.floor();
    // pos is in [0, last] so the cast cannot truncate
    let index = (i as usize).min(last);
    if index >= last {
        (last, 0.0)
    } else {
        (index, pos - i)
    }
}
