//! Error types for parula

use thiserror::Error;

/// Result type for parula operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in parula operations
///
/// Mapping itself never fails: empty inputs, degenerate ranges and
/// out-of-range factors all have defined results. Errors only arise from
/// caller-provided buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Output buffer length does not match the input length
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
