//! Mathematical helpers for table lookup

pub mod interpolation;

pub use interpolation::{clamp_unit, lerp, lerp4, table_position};
