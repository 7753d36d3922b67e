//! Batch colormap kernels
//!
//! These functions process whole scalar fields or color buffers.

use multiversion::multiversion;

use crate::color::Rgb;
use crate::mapper::ScalarRange;
use crate::table::PARULA;

/// Map factors already in [0, 1] to colors
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn map_factors_batch(src: &[f64], dst: &mut [Rgb]) {
    assert!(dst.len() >= src.len());

    for (out, &f) in dst.iter_mut().zip(src) {
        *out = PARULA.lookup(f);
    }
}

/// Map raw scalars to colors, normalizing by `range` when given
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn map_normalized_batch<T>(src: &[T], range: Option<ScalarRange>, dst: &mut [Rgb])
where
    T: Copy + Into<f64>,
{
    assert!(dst.len() >= src.len());

    match range {
        Some(range) => {
            for (out, &z) in dst.iter_mut().zip(src) {
                *out = PARULA.lookup(range.factor(z.into()));
            }
        }
        None => {
            for (out, &z) in dst.iter_mut().zip(src) {
                *out = PARULA.lookup(z.into());
            }
        }
    }
}

/// Convert normalized colors to packed u8 RGB
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgb_to_rgb8_batch(src: &[Rgb], dst: &mut [u8]) {
    assert!(dst.len() >= src.len() * 3);

    for (rgb, dst_chunk) in src.iter().zip(dst.chunks_exact_mut(3)) {
        dst_chunk.copy_from_slice(&rgb.to_u8());
    }
}
