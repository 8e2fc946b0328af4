//! Color values for action buttons.

use palette::{Hsv, IntoColor, Srgb};

/// 24-bit color as written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from hue/saturation/value components.
    ///
    /// `hue` is a turn fraction in `0.0..=1.0`, the form the demo's
    /// button backgrounds come in; `saturation` and `value` are in
    /// `0.0..=1.0`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let hsv = Hsv::new(hue * 360.0, saturation, value);
        let srgb: Srgb = hsv.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();

        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hsv_extremes() {
        assert_eq!(Rgb::from_hsv(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hsv(0.5, 1.0, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_from_hsv_pure_red() {
        // Zero hue at full saturation and value is pure red.
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }
}
