//! RGB Color Primitives
//!
//! Output type of the colormap. `Rgb` is `#[repr(C)]` plain data, so a
//! `&[Rgb]` can be reinterpreted as an N-by-3 row-major `&[f64]`.

use bytemuck::{Pod, Zeroable};

use crate::math::lerp;

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit values (0-255)
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Per-channel `self * (1 - t) + other * t`
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.r >= 0.0
            && self.r <= 1.0
            && self.g >= 0.0
            && self.g <= 1.0
            && self.b >= 0.0
            && self.b <= 1.0
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// View a slice of colors as N-by-3 row-major components
    #[inline]
    pub fn as_flat(colors: &[Rgb]) -> &[f64] {
        bytemuck::cast_slice(colors)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(feature = "palette")]
impl From<Rgb> for palette::Srgb<f64> {
    fn from(rgb: Rgb) -> Self {
        palette::Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(feature = "palette")]
impl From<palette::Srgb<f64>> for Rgb {
    fn from(srgb: palette::Srgb<f64>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_u8_conversion() {
        assert_eq!(Rgb::new(1.0, 128.0 / 255.0, 0.0).to_u8(), [255, 128, 0]);
        assert_eq!(Rgb::new(1.5, -0.5, 0.5).to_u8(), [255, 0, 128]);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0.0, 0.2, 0.4);
        let b = Rgb::new(1.0, 0.6, 0.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert!(a.lerp(&b, 1.0).approx_eq(&b, EPSILON));
        assert!(a.lerp(&b, 0.5).approx_eq(&Rgb::new(0.5, 0.4, 0.2), EPSILON));
    }

    #[test]
    fn test_in_gamut() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_in_gamut());
        assert!(!Rgb::new(1.5, 0.0, 0.0).is_in_gamut());
        assert!(!Rgb::new(0.0, -0.1, 0.0).is_in_gamut());
    }

    #[test]
    fn test_flat_view() {
        let colors = [Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6)];
        assert_eq!(Rgb::as_flat(&colors), &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }

    #[cfg(feature = "palette")]
    #[test]
    fn test_palette_conversion() {
        let rgb = Rgb::new(0.25, 0.5, 0.75);
        let srgb: palette::Srgb<f64> = rgb.into();
        assert_eq!(Rgb::from(srgb), rgb);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Rgb::new(0.5, 0.25, 1.0)).unwrap();
        assert_eq!(json, r#"{"r":0.5,"g":0.25,"b":1.0}"#);
    }
}
