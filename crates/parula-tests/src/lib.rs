//! # parula-tests
//!
//! Parity and property testing for parula-core.
//!
//! This crate provides:
//! - A single-precision reference implementation of the mapping
//! - Deterministic scalar field patterns
//! - Accuracy measurement (channel error, Lab deltaE)
//! - A parity test runner with serializable reports
//!
//! ## Test Categories
//!
//! 1. **Reference Parity**: core output against the f32 reference
//! 2. **Palette Properties**: perceptual uniformity of the table itself
//! 3. **Field Mapping**: normalization policies, shared ranges, parallel
//!    agreement

pub mod accuracy;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelStats, compare_colors, delta_e_76, delta_e_2000, rgb_to_lab};
pub use parity::{ParityError, ParityResult, ParityTest};
pub use patterns::{FieldPattern, generate_field};

/// Install a `tracing` subscriber for test output
///
/// Honours `RUST_LOG`; safe to call from several tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
