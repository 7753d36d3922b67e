//! Scalar field generation
//!
//! Deterministic fields standing in for per-vertex or per-cell data.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Field pattern types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldPattern {
    /// Evenly spaced values from `0` to `len - 1`
    Ramp,
    /// Every value equal
    Constant(f64),
    /// Uniform random values in [-1000, 1000) with seed
    Random(u64),
    /// Smooth oscillation, like a height field sampled along a line
    Sine,
    /// Small values with a single large outlier in the middle
    Spike,
    /// Values outside [0, 1] on both sides, for clamping checks
    Overshoot,
}

impl FieldPattern {
    /// Patterns with a non-degenerate range
    pub const VARYING: &[FieldPattern] = &[
        FieldPattern::Ramp,
        FieldPattern::Random(7),
        FieldPattern::Random(0xC0FFEE),
        FieldPattern::Sine,
        FieldPattern::Spike,
        FieldPattern::Overshoot,
    ];
}

/// Generate a field of `len` values
pub fn generate_field(pattern: FieldPattern, len: usize) -> Vec<f64> {
    match pattern {
        FieldPattern::Ramp => (0..len).map(|i| i as f64).collect(),
        FieldPattern::Constant(v) => vec![v; len],
        FieldPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
        }
        FieldPattern::Sine => (0..len)
            .map(|i| (i as f64 * 0.05).sin() * 12.5 + 3.0)
            .collect(),
        FieldPattern::Spike => {
            let mut data: Vec<f64> = (0..len).map(|i| (i % 10) as f64 * 0.01).collect();
            if let Some(mid) = data.get_mut(len / 2) {
                *mid = 1.0e6;
            }
            data
        }
        FieldPattern::Overshoot => (0..len)
            .map(|i| {
                let t = if len > 1 { i as f64 / (len - 1) as f64 } else { 0.0 };
                t * 3.0 - 1.0
            })
            .collect(),
    }
}

/// Standard field sizes
pub mod sizes {
    pub const TINY: usize = 8;
    pub const SMALL: usize = 257;
    pub const MEDIUM: usize = 10_000;
    pub const LARGE: usize = 250_000;
}
