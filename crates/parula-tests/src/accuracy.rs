//! Accuracy measurement
//!
//! Two views of a difference between color buffers: raw per-channel error,
//! which bounds numeric drift, and deltaE in Lab, which says whether a
//! difference would be visible at all.

use palette::white_point::D65;
use palette::{IntoColor, Lab, Srgb};
use parula_core::Rgb;
use serde::{Deserialize, Serialize};

/// Per-channel absolute error statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Mean absolute error over all channels
    pub mean_abs: f64,
    /// Maximum absolute error on any channel
    pub max_abs: f64,
    /// Index of the color holding `max_abs`
    pub worst_index: usize,
    /// Number of colors compared
    pub count: usize,
}

impl ChannelStats {
    /// Check if the error is within single-precision rounding
    pub fn is_f32_exact(&self) -> bool {
        self.max_abs < 2e-6
    }
}

/// Compare colors against single-precision reference colors
///
/// Compares the common prefix; callers check lengths separately.
pub fn compare_colors(reference: &[[f32; 3]], result: &[Rgb]) -> ChannelStats {
    let mut stats = ChannelStats::default();
    let mut total = 0.0;

    for (i, (r, c)) in reference.iter().zip(result).enumerate() {
        for (expected, actual) in r.iter().zip(c.to_array()) {
            let err = (f64::from(*expected) - actual).abs();
            total += err;
            if err > stats.max_abs {
                stats.max_abs = err;
                stats.worst_index = i;
            }
        }
        stats.count += 1;
    }

    if stats.count > 0 {
        stats.mean_abs = total / (stats.count * 3) as f64;
    }
    stats
}

/// Lab coordinates (D65) of a color, treated as sRGB
pub fn rgb_to_lab(rgb: &Rgb) -> [f64; 3] {
    let lab: Lab<D65, f64> = Srgb::new(rgb.r, rgb.g, rgb.b).into_linear().into_color();
    [lab.l, lab.a, lab.b]
}

/// CIE76 color difference (Euclidean distance in Lab)
pub fn delta_e_76(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    lab1.iter()
        .zip(lab2)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// CIEDE2000 color difference
///
/// A value of 1.0 is roughly the smallest difference a trained observer
/// can see.
pub fn delta_e_2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let [l1, a1, b1] = lab1;
    let [l2, a2, b2] = lab2;

    // 25^7
    const POW25_7: f64 = 6103515625.0;

    let c_avg = ((a1 * a1 + b1 * b1).sqrt() + (a2 * a2 + b2 * b2).sqrt()) / 2.0;
    let c_avg_pow7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);
    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
    let c_avg_prime = (c1_prime + c2_prime) / 2.0;

    let h1_prime = hue_degrees(a1_prime, b1);
    let h2_prime = hue_degrees(a2_prime, b2);
    let chroma_zero = c1_prime * c2_prime == 0.0;

    let delta_h_prime = if chroma_zero {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let delta_h_big =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    let h_avg_prime = if chroma_zero {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_avg_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg_prime).to_radians().cos()
        + 0.32 * (3.0 * h_avg_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg_prime - 63.0).to_radians().cos();

    let l_avg_minus_50_sq = ((l1 + l2) / 2.0 - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_avg_minus_50_sq) / (20.0 + l_avg_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_avg_prime;
    let s_h = 1.0 + 0.015 * c_avg_prime * t;

    let delta_theta = 30.0 * (-((h_avg_prime - 275.0) / 25.0).powi(2)).exp();
    let c_avg_prime_pow7 = c_avg_prime.powi(7);
    let r_c = 2.0 * (c_avg_prime_pow7 / (c_avg_prime_pow7 + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta.to_radians()).sin();

    let dl = (l2 - l1) / s_l;
    let dc = (c2_prime - c1_prime) / s_c;
    let dh = delta_h_big / s_h;

    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt()
}

/// Hue angle in degrees, [0, 360)
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// Largest byte difference between two packed buffers
pub fn max_byte_difference(reference: &[u8], result: &[u8]) -> u8 {
    reference
        .iter()
        .zip(result)
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or(0)
}
