//! Color types
//!
//! This module provides the RGB output type of the colormap.

pub mod rgb;

pub use rgb::Rgb;
