//! Parity testing framework
//!
//! Compares parula-core output against the single-precision reference.

use crate::accuracy::{ChannelStats, compare_colors};
use crate::patterns::{FieldPattern, generate_field};
use crate::reference::{reference_factors, reference_field};
use parula_core::{Normalization, Rgb, map_array_with};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tolerance: a few f32 ulps at magnitude 1
pub const DEFAULT_TOLERANCE: f64 = 2e-6;

/// Errors raised while running a parity test
#[derive(Error, Debug)]
pub enum ParityError {
    /// The two outputs do not have the same number of colors
    #[error("Length mismatch: reference has {reference} colors, result has {result}")]
    LengthMismatch { reference: usize, result: usize },
}

/// Result of a parity test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Channel error statistics
    pub stats: ChannelStats,
    /// Tolerance the test was held to
    pub tolerance: f64,
    /// Whether the test passed
    pub passed: bool,
}

/// A parity test comparing parula-core to the reference
#[derive(Debug, Clone)]
pub struct ParityTest {
    /// Test name
    pub name: String,
    /// Field under test
    pub pattern: FieldPattern,
    /// Number of values in the field
    pub len: usize,
    /// How the field is normalized
    pub normalization: Normalization,
    /// Maximum allowed channel error
    pub tolerance: f64,
}

impl ParityTest {
    /// Create a new parity test with automatic normalization
    pub fn new(name: impl Into<String>, pattern: FieldPattern, len: usize) -> Self {
        Self {
            name: name.into(),
            pattern,
            len,
            normalization: Normalization::Auto,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Use a different normalization
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Use a different tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Generate the field, map it both ways and compare
    pub fn run(&self) -> Result<ParityResult, ParityError> {
        let field = generate_field(self.pattern, self.len);
        let result = map_array_with(&field, self.normalization);
        let reference = match self.normalization {
            Normalization::Identity => reference_factors(&field),
            Normalization::Auto => reference_field(&field, None),
            Normalization::Range { min, max } => reference_field(&field, Some((min, max))),
        };
        self.compare(&reference, &result)
    }

    /// Compare already computed outputs
    pub fn compare(
        &self,
        reference: &[[f32; 3]],
        result: &[Rgb],
    ) -> Result<ParityResult, ParityError> {
        if reference.len() != result.len() {
            return Err(ParityError::LengthMismatch {
                reference: reference.len(),
                result: result.len(),
            });
        }
        let stats = compare_colors(reference, result);
        tracing::debug!(
            test = %self.name,
            max_abs = stats.max_abs,
            worst_index = stats.worst_index,
            "parity comparison"
        );
        Ok(ParityResult {
            test_name: self.name.clone(),
            stats,
            tolerance: self.tolerance,
            passed: stats.max_abs <= self.tolerance,
        })
    }
}
