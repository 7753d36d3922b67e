//! Data-parallel field mapping (feature `rayon`)
//!
//! Same results as the serial functions in [`crate::mapper`]: the range is
//! resolved once, then fixed-size chunks are mapped by the batch kernel on
//! the rayon pool.

use rayon::prelude::*;

use crate::batch::map_normalized_batch;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::mapper::{Normalization, ScalarRange};

/// Elements per rayon task
pub const CHUNK_SIZE: usize = 4096;

/// Finite min/max of `z`, reduced in parallel
pub fn par_scalar_range<T>(z: &[T]) -> Option<ScalarRange>
where
    T: Copy + Into<f64> + Sync,
{
    z.par_chunks(CHUNK_SIZE)
        .map(ScalarRange::of)
        .reduce(
            || None,
            |a, b| match (a, b) {
                (Some(a), Some(b)) => Some(a.union(&b)),
                (a, None) => a,
                (None, b) => b,
            },
        )
}

/// Parallel version of [`crate::map_array_with`]
pub fn par_map_array_with<T>(z: &[T], normalization: Normalization) -> Vec<Rgb>
where
    T: Copy + Into<f64> + Sync,
{
    let mut out = vec![Rgb::default(); z.len()];
    fill(z, normalization, &mut out);
    out
}

/// Parallel version of [`crate::map_into`]
///
/// # Errors
/// [`Error::BufferSize`] if `out` is not exactly as long as `z`.
pub fn par_map_into<T>(z: &[T], normalization: Normalization, out: &mut [Rgb]) -> Result<()>
where
    T: Copy + Into<f64> + Sync,
{
    if out.len() != z.len() {
        return Err(Error::BufferSize {
            expected: z.len(),
            actual: out.len(),
        });
    }
    fill(z, normalization, out);
    Ok(())
}

fn fill<T>(z: &[T], normalization: Normalization, out: &mut [Rgb])
where
    T: Copy + Into<f64> + Sync,
{
    let range = match normalization {
        Normalization::Auto => {
            let detected = par_scalar_range(z).unwrap_or(ScalarRange::new(0.0, 0.0));
            Normalization::from(detected).resolve(z)
        }
        other => other.resolve(z),
    };

    tracing::trace!(
        len = z.len(),
        chunks = z.len().div_ceil(CHUNK_SIZE),
        "mapping scalar field in parallel"
    );

    out.par_chunks_mut(CHUNK_SIZE)
        .zip(z.par_chunks(CHUNK_SIZE))
        .for_each(|(dst, src)| map_normalized_batch(src, range, dst));
}
