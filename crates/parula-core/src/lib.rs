//! # parula - Parula colormap for scalar fields
//!
//! Maps scalar values to RGB colors with the 256-entry "parula" palette,
//! MATLAB's perceptually uniform default colormap. Intended for colorizing
//! per-vertex or per-cell scalar data.
//!
//! ## Features
//!
//! - `rayon`: parallel field mapping in [`parallel`]
//! - `serde`: `Serialize`/`Deserialize` for [`Rgb`], [`Normalization`] and
//!   [`ScalarRange`]
//! - `palette`: conversions between [`Rgb`] and `palette::Srgb<f64>`
//!
//! ## Quick Start
//!
//! ```
//! use parula_core::{map_array_range, map_scalar, Normalization};
//!
//! // A single factor in [0, 1]
//! let mid = map_scalar(0.5);
//! assert!(mid.is_in_gamut());
//!
//! // A scalar field on a fixed scale
//! let heights = [0.0, 2.5, 10.0];
//! let colors = map_array_range(&heights, 0.0, 10.0);
//! assert_eq!(colors.len(), heights.len());
//!
//! // Packed bytes for an image or a vertex buffer
//! let bytes = parula_core::map_array_rgb8(&heights, Normalization::Auto);
//! assert_eq!(bytes.len(), 9);
//! ```

pub mod batch;
pub mod color;
pub mod error;
pub mod mapper;
pub mod math;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod table;

pub use color::Rgb;
pub use error::{Error, Result};
pub use mapper::{
    Normalization, ScalarRange, map_array, map_array_range, map_array_rgb8, map_array_with,
    map_into, map_scalar, map_scalar_rgba, sample,
};
pub use table::{ColorTable, PARULA, TABLE_SIZE};

#[cfg(feature = "rayon")]
pub use parallel::{par_map_array_with, par_map_into};

/// Version of parula
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
