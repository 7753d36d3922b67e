//! CPU-Dispatched Batch Kernels
//!
//! Field-sized loops compiled for several instruction sets with the
//! `multiversion` crate; the best available version is picked at runtime.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod color;

pub use color::{map_factors_batch, map_normalized_batch, rgb_to_rgb8_batch};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features() {
        let features = active_features();
        println!("Active SIMD features: {}", features);
        assert!(!features.is_empty());
    }
}
