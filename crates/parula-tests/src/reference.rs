//! Single-precision reference implementation
//!
//! A straightforward mapping that keeps every intermediate in `f32`, the way
//! a float-matrix implementation of the palette computes it. It shares only
//! the table values with `parula-core`; indexing, normalization and blending
//! are written out independently.

use parula_core::PARULA;

const LAST: f32 = 255.0;

/// Reference color for a factor
pub fn reference_color(f: f32) -> [f32; 3] {
    let f = if f.is_nan() { 0.0 } else { f.max(0.0).min(1.0) };
    let x = f * LAST;
    let least = x.floor() as usize;
    if least >= 255 {
        let row = PARULA.row(255);
        return [row[0], row[1], row[2]];
    }
    let t = x - least as f32;
    let lo = PARULA.row(least);
    let hi = PARULA.row(least + 1);
    [
        lo[0] * (1.0 - t) + hi[0] * t,
        lo[1] * (1.0 - t) + hi[1] * t,
        lo[2] * (1.0 - t) + hi[2] * t,
    ]
}

/// Reference colors for a field of finite values
///
/// With `range == None` the field's own min/max is used.
pub fn reference_field(z: &[f64], range: Option<(f64, f64)>) -> Vec<[f32; 3]> {
    let (min, max) = range.unwrap_or_else(|| {
        z.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (if v < lo { v } else { lo }, if v > hi { v } else { hi })
        })
    });
    let span = max - min;

    z.iter()
        .map(|&v| {
            let f = if span == 0.0 { 0.0 } else { (v - min) / span };
            reference_color(f as f32)
        })
        .collect()
}

/// Reference colors for factors used as-is
pub fn reference_factors(z: &[f64]) -> Vec<[f32; 3]> {
    z.iter().map(|&f| reference_color(f as f32)).collect()
}

/// Reference packed 8-bit RGB
pub fn reference_rgb8(colors: &[[f32; 3]]) -> Vec<u8> {
    colors
        .iter()
        .flat_map(|c| c.map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_endpoints() {
        assert_eq!(reference_color(0.0), [0.2081, 0.1663, 0.5292]);
        assert_eq!(reference_color(1.0), [0.9763, 0.9831, 0.0538]);
        assert_eq!(reference_color(-4.0), reference_color(0.0));
        assert_eq!(reference_color(f32::NAN), reference_color(0.0));
    }

    #[test]
    fn test_reference_constant_field() {
        let colors = reference_field(&[3.0, 3.0], None);
        assert_eq!(colors, vec![reference_color(0.0); 2]);
    }

    #[test]
    fn test_reference_rgb8() {
        let bytes = reference_rgb8(&[[0.0, 0.5, 1.0]]);
        assert_eq!(bytes, vec![0, 128, 255]);
    }
}
