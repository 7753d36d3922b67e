//! Scalar-to-color mapping
//!
//! Entry points for colorizing single values and whole scalar fields with
//! the parula table. Field inputs are any slice whose elements widen to
//! `f64` (`f64`, `f32`, small integers), outputs are index-aligned `Rgb`
//! values.
//!
//! ```
//! use parula_core::{map_array, map_scalar, PARULA};
//!
//! assert_eq!(map_scalar(0.0), PARULA.rgb(0));
//!
//! let colors = map_array(&[2.0, 4.0, 6.0], true);
//! assert_eq!(colors[0], PARULA.rgb(0));
//! assert_eq!(colors[2], PARULA.rgb(255));
//! ```

use crate::batch::{map_normalized_batch, rgb_to_rgb8_batch};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::table::PARULA;

/// Closed interval of scalar values mapped onto the table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarRange {
    /// Value mapped to the first row
    pub min: f64,
    /// Value mapped to the last row
    pub max: f64,
}

impl ScalarRange {
    /// Create a range. `min > max` is allowed and inverts the palette.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max over the finite values of `z`
    ///
    /// NaN and infinite values are skipped. Returns `None` if no finite
    /// value exists.
    pub fn of<T: Copy + Into<f64>>(z: &[T]) -> Option<Self> {
        z.iter()
            .map(|&v| Into::<f64>::into(v))
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Smallest range covering both `self` and `other`
    ///
    /// Useful for coloring several fields on one shared scale.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// True when `min == max`, so normalization would divide by zero
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Normalized factor for `z`
    ///
    /// A degenerate range sends every value to 0. Ranges wider than
    /// `f64::MAX` are rescaled at half magnitude.
    #[inline]
    pub fn factor(&self, z: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let span = self.max - self.min;
        if span.is_finite() {
            (z - self.min) / span
        } else {
            (z / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

/// How raw scalars become factors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Normalization {
    /// Values are used directly as factors
    Identity,
    /// Values are rescaled by the finite min/max of the input
    #[default]
    Auto,
    /// Values are rescaled by a caller-supplied range
    Range { min: f64, max: f64 },
}

impl Normalization {
    /// Range to normalize `z` by, or `None` for [`Normalization::Identity`]
    pub fn resolve<T: Copy + Into<f64>>(&self, z: &[T]) -> Option<ScalarRange> {
        let range = match *self {
            Normalization::Identity => return None,
            Normalization::Auto => ScalarRange::of(z).unwrap_or(ScalarRange::new(0.0, 0.0)),
            Normalization::Range { min, max } => ScalarRange::new(min, max),
        };
        if range.is_degenerate() {
            tracing::debug!(
                min = range.min,
                max = range.max,
                len = z.len(),
                "degenerate scalar range, mapping every value to the first color"
            );
        }
        Some(range)
    }
}

impl From<bool> for Normalization {
    fn from(normalize: bool) -> Self {
        if normalize {
            Normalization::Auto
        } else {
            Normalization::Identity
        }
    }
}

impl From<ScalarRange> for Normalization {
    fn from(range: ScalarRange) -> Self {
        Normalization::Range {
            min: range.min,
            max: range.max,
        }
    }
}

/// Color for a single factor
///
/// `f` is clamped to [0, 1]; NaN maps like 0.
#[inline]
pub fn map_scalar(f: f64) -> Rgb {
    PARULA.lookup(f)
}

/// RGBA for a single factor
#[inline]
pub fn map_scalar_rgba(f: f64) -> [f64; 4] {
    PARULA.lookup_rgba(f)
}

/// Colors for a scalar field
///
/// With `normalize` the field is rescaled by its own min/max first,
/// otherwise each value is used as the factor directly.
pub fn map_array<T: Copy + Into<f64>>(z: &[T], normalize: bool) -> Vec<Rgb> {
    map_array_with(z, Normalization::from(normalize))
}

/// Colors for a scalar field rescaled by `[min_z, max_z]`
///
/// The range is not validated: `min_z > max_z` inverts the palette and
/// values outside the range saturate at the end colors.
pub fn map_array_range<T: Copy + Into<f64>>(z: &[T], min_z: f64, max_z: f64) -> Vec<Rgb> {
    map_array_with(
        z,
        Normalization::Range {
            min: min_z,
            max: max_z,
        },
    )
}

/// Colors for a scalar field with an explicit normalization
pub fn map_array_with<T: Copy + Into<f64>>(z: &[T], normalization: Normalization) -> Vec<Rgb> {
    let mut out = vec![Rgb::default(); z.len()];
    map_normalized_batch(z, normalization.resolve(z), &mut out);
    out
}

/// Fill a caller-owned buffer with colors for `z`
///
/// # Errors
/// [`Error::BufferSize`] if `out` is not exactly as long as `z`.
pub fn map_into<T: Copy + Into<f64>>(
    z: &[T],
    normalization: Normalization,
    out: &mut [Rgb],
) -> Result<()> {
    if out.len() != z.len() {
        return Err(Error::BufferSize {
            expected: z.len(),
            actual: out.len(),
        });
    }
    map_normalized_batch(z, normalization.resolve(z), out);
    Ok(())
}

/// Packed 8-bit RGB (`3 * z.len()` bytes) for a scalar field
pub fn map_array_rgb8<T: Copy + Into<f64>>(z: &[T], normalization: Normalization) -> Vec<u8> {
    let colors = map_array_with(z, normalization);
    let mut bytes = vec![0u8; colors.len() * 3];
    rgb_to_rgb8_batch(&colors, &mut bytes);
    bytes
}

/// `m` colors evenly spaced over the whole palette
///
/// Color `k` is `map_scalar(k / (m - 1))`. A single color is the first
/// row.
pub fn sample(m: usize) -> Vec<Rgb> {
    match m {
        0 => Vec::new(),
        1 => vec![map_scalar(0.0)],
        _ => {
            let step = (m - 1) as f64;
            (0..m).map(|k| map_scalar(k as f64 / step)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{LAST_ROW, TABLE_SIZE};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_map_scalar_endpoints() {
        assert_eq!(map_scalar(0.0), PARULA.rgb(0));
        assert_eq!(map_scalar(1.0), PARULA.rgb(LAST_ROW));

        let first = map_scalar(0.0);
        assert!(first.approx_eq(&Rgb::new(0.2081, 0.1663, 0.5292), 1e-6));
        let last = map_scalar(1.0);
        assert!(last.approx_eq(&Rgb::new(0.9763, 0.9831, 0.0538), 1e-6));
    }

    #[test]
    fn test_map_scalar_hits_rows() {
        for i in 0..LAST_ROW {
            assert_eq!(
                map_scalar(i as f64 / LAST_ROW as f64),
                PARULA.rgb(i),
                "row {}",
                i
            );
        }
    }

    #[test]
    fn test_factor_overflowing_span() {
        let range = ScalarRange::new(-1e308, 1e308);
        assert!((range.max - range.min).is_infinite());
        assert_eq!(range.factor(-1e308), 0.0);
        assert_eq!(range.factor(0.0), 0.5);
        assert_eq!(range.factor(1e308), 1.0);

        let colors = map_array(&[-1e308, 1e308], true);
        assert_eq!(colors, vec![PARULA.rgb(0), PARULA.rgb(LAST_ROW)]);

        let colors = map_array(&[f64::MIN, 0.0, f64::MAX], true);
        assert_eq!(colors[0], PARULA.rgb(0));
        assert!(colors[1].approx_eq(&map_scalar(0.5), EPSILON));
        assert_eq!(colors[2], PARULA.rgb(LAST_ROW));
    }

    #[test]
    fn test_map_scalar_window_advances_one_row() {
        let step = 1.0 / LAST_ROW as f64;
        for i in 0..LAST_ROW - 1 {
            let f = (i as f64 + 0.5) * step;
            let a = map_scalar(f);
            let b = map_scalar(f + step);
            let expect_a = PARULA.rgb(i).lerp(&PARULA.rgb(i + 1), 0.5);
            let expect_b = PARULA.rgb(i + 1).lerp(&PARULA.rgb(i + 2), 0.5);
            assert!(a.approx_eq(&expect_a, 1e-9));
            assert!(b.approx_eq(&expect_b, 1e-9));
        }
    }

    #[test]
    fn test_map_scalar_in_gamut() {
        for k in 0..=1000 {
            assert!(map_scalar(k as f64 / 1000.0).is_in_gamut());
        }
    }

    #[test]
    fn test_map_scalar_clamps() {
        assert_eq!(map_scalar(-3.0), PARULA.rgb(0));
        assert_eq!(map_scalar(7.5), PARULA.rgb(LAST_ROW));
        assert_eq!(map_scalar(f64::INFINITY), PARULA.rgb(LAST_ROW));
        assert_eq!(map_scalar(f64::NEG_INFINITY), PARULA.rgb(0));
        assert_eq!(map_scalar(-0.0), PARULA.rgb(0));
    }

    #[test]
    fn test_map_scalar_nan() {
        assert_eq!(map_scalar(f64::NAN), PARULA.rgb(0));
    }

    #[test]
    fn test_map_scalar_rgba_alpha() {
        let rgba = map_scalar_rgba(1.0);
        assert_eq!(rgba, PARULA.row(LAST_ROW).map(f64::from));
    }

    #[test]
    fn test_constant_field_maps_to_first_row() {
        let colors = map_array(&[5.0, 5.0, 5.0], true);
        assert_eq!(colors, vec![PARULA.rgb(0); 3]);

        let single = map_array(&[42.0], true);
        assert_eq!(single, vec![PARULA.rgb(0)]);
    }

    #[test]
    fn test_explicit_range() {
        let colors = map_array_range(&[0.0, 10.0], 0.0, 10.0);
        assert_eq!(colors, vec![map_scalar(0.0), map_scalar(1.0)]);
    }

    #[test]
    fn test_explicit_degenerate_range() {
        let colors = map_array_range(&[-1.0, 3.0, 3.0], 3.0, 3.0);
        assert_eq!(colors, vec![PARULA.rgb(0); 3]);
    }

    #[test]
    fn test_inverted_range() {
        let colors = map_array_range(&[0.0, 10.0], 10.0, 0.0);
        assert_eq!(colors, vec![map_scalar(1.0), map_scalar(0.0)]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [f64; 0] = [];
        assert!(map_array(&empty, true).is_empty());
        assert!(map_array(&empty, false).is_empty());
        assert!(map_array_range(&empty, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_affine_invariance() {
        let z = [1.0, 4.0, 2.0, 9.0, -3.5];
        let scaled: Vec<f64> = z.iter().map(|v| 2.0 * v + 3.0).collect();

        let a = map_array(&z, true);
        let b = map_array(&scaled, true);
        for (x, y) in a.iter().zip(&b) {
            assert!(x.approx_eq(y, EPSILON));
        }
    }

    #[test]
    fn test_identity_normalization_clamps() {
        let colors = map_array(&[-0.5, 0.0, 1.0, 1.5], false);
        assert_eq!(colors[0], PARULA.rgb(0));
        assert_eq!(colors[1], PARULA.rgb(0));
        assert_eq!(colors[2], PARULA.rgb(LAST_ROW));
        assert_eq!(colors[3], PARULA.rgb(LAST_ROW));
    }

    #[test]
    fn test_non_finite_values_in_auto_range() {
        let colors = map_array(&[f64::NAN, 0.0, 2.0, f64::INFINITY, f64::NEG_INFINITY], true);
        assert_eq!(colors[0], PARULA.rgb(0));
        assert_eq!(colors[1], PARULA.rgb(0));
        assert_eq!(colors[2], PARULA.rgb(LAST_ROW));
        assert_eq!(colors[3], PARULA.rgb(LAST_ROW));
        assert_eq!(colors[4], PARULA.rgb(0));
    }

    #[test]
    fn test_all_nan_is_degenerate() {
        let colors = map_array(&[f64::NAN, f64::NAN], true);
        assert_eq!(colors, vec![PARULA.rgb(0); 2]);
    }

    #[test]
    fn test_f32_and_integer_inputs() {
        let from_f32 = map_array(&[0.0f32, 0.5, 1.0], false);
        let from_f64 = map_array(&[0.0f64, 0.5, 1.0], false);
        assert_eq!(from_f32, from_f64);

        let from_int = map_array(&[0i32, 5, 10], true);
        assert_eq!(from_int, map_array(&[0.0, 0.5, 1.0], false));
    }

    #[test]
    fn test_scalar_range_of() {
        assert_eq!(
            ScalarRange::of(&[3.0, -1.0, 8.0]),
            Some(ScalarRange::new(-1.0, 8.0))
        );
        assert_eq!(ScalarRange::of::<f64>(&[]), None);
        assert_eq!(ScalarRange::of(&[f64::NAN, f64::INFINITY]), None);
    }

    #[test]
    fn test_scalar_range_union() {
        let a = ScalarRange::new(0.0, 2.0);
        let b = ScalarRange::new(-1.0, 1.0);
        assert_eq!(a.union(&b), ScalarRange::new(-1.0, 2.0));
    }

    #[test]
    fn test_shared_range_across_fields() {
        let a = [0.0, 1.0];
        let b = [1.0, 2.0];
        let range = ScalarRange::of(&a)
            .zip(ScalarRange::of(&b))
            .map(|(x, y)| x.union(&y))
            .unwrap();

        let ca = map_array_with(&a, range.into());
        let cb = map_array_with(&b, range.into());
        // 1.0 sits at the same place on the shared scale in both fields
        assert_eq!(ca[1], cb[0]);
        assert_eq!(cb[1], PARULA.rgb(LAST_ROW));
    }

    #[test]
    fn test_map_into() {
        let z = [0.0, 0.5, 1.0];
        let mut out = [Rgb::default(); 3];
        map_into(&z, Normalization::Identity, &mut out).unwrap();
        assert_eq!(out.to_vec(), map_array(&z, false));
    }

    #[test]
    fn test_map_into_size_mismatch() {
        let mut out = [Rgb::default(); 2];
        let err = map_into(&[0.0, 0.5, 1.0], Normalization::Auto, &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_map_array_rgb8() {
        let bytes = map_array_rgb8(&[0.0, 1.0], Normalization::Identity);
        assert_eq!(bytes.len(), 6);
        assert_eq!(&bytes[..3], &PARULA.rgb(0).to_u8());
        assert_eq!(&bytes[3..], &PARULA.rgb(LAST_ROW).to_u8());
        // 0.2081 * 255 = 53.07, 0.1663 * 255 = 42.41, 0.5292 * 255 = 134.95
        assert_eq!(&bytes[..3], &[53, 42, 135]);
    }

    #[test]
    fn test_sample() {
        assert!(sample(0).is_empty());
        assert_eq!(sample(1), vec![PARULA.rgb(0)]);

        let two = sample(2);
        assert_eq!(two, vec![PARULA.rgb(0), PARULA.rgb(LAST_ROW)]);

        let full = sample(TABLE_SIZE);
        for (i, color) in full.iter().enumerate() {
            assert_eq!(*color, PARULA.rgb(i), "row {}", i);
        }
    }

    #[test]
    fn test_normalization_from_bool() {
        assert_eq!(Normalization::from(true), Normalization::Auto);
        assert_eq!(Normalization::from(false), Normalization::Identity);
        assert_eq!(Normalization::default(), Normalization::Auto);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_normalization_serde() {
        let norm = Normalization::Range { min: 0.0, max: 2.5 };
        let json = serde_json::to_string(&norm).unwrap();
        let back: Normalization = serde_json::from_str(&json).unwrap();
        assert_eq!(back, norm);
    }
}
