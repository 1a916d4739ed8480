//! RGB to HSL components and HSL to RGB.
//!
//! Hue is in degrees, saturation and lightness are percentages. The
//! conversions follow the standard hexcone model (the one CSS `hsl()` uses).

use super::rgb::{normalize, Color, RawColor};
use crate::error::ColorError;

impl Color {
    /// HSL lightness as a percentage in `0..=100`.
    pub fn lightness(self) -> f64 {
        let (r, g, b) = self.unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        (max + min) / 2.0 * 100.0
    }

    /// HSL saturation as a percentage in `0..=100`.
    ///
    /// Achromatic colors (`max == min`) have saturation 0.
    pub fn saturation(self) -> f64 {
        let (r, g, b) = self.unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }
        let lightness = (max + min) / 2.0;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        saturation * 100.0
    }

    /// Hue in whole degrees, `0..360`.
    ///
    /// Achromatic colors have hue 0. When several channels share the maximum,
    /// the first of red, green, blue decides the sector, so `#FFFF00` is
    /// computed through the red branch.
    pub fn hue(self) -> u16 {
        let (r, g, b) = self.unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta == 0.0 {
            return 0;
        }
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        // sector is in [0, 6); rounding can still land on 360.
        ((sector / 6.0 * 360.0).round() as u16) % 360
    }
}

/// Lightness percentage of the normalized color.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`.
pub fn lightness_of(color: impl Into<Option<RawColor>>) -> Result<f64, ColorError> {
    normalize(color).map(Color::lightness)
}

/// Saturation percentage of the normalized color.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`.
pub fn saturation_of(color: impl Into<Option<RawColor>>) -> Result<f64, ColorError> {
    normalize(color).map(Color::saturation)
}

/// Hue in whole degrees of the normalized color.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`.
pub fn hue_of(color: impl Into<Option<RawColor>>) -> Result<u16, ColorError> {
    normalize(color).map(Color::hue)
}

/// Convert HSL to a canonical color.
///
/// `hue` is reduced into `0..360`, negative angles included. `saturation`
/// and `lightness` are clamped to `0..=100`. With zero saturation the result
/// is the gray given by lightness.
///
/// ```
/// use hsl_picker::{color::hsl_to_color, Color};
/// assert_eq!(hsl_to_color(120.0, 100.0, 50.0), Color::GREEN);
/// assert_eq!(hsl_to_color(480.0, 100.0, 50.0), Color::GREEN);
/// assert_eq!(hsl_to_color(0.0, 0.0, 50.0), Color::from_u8(128, 128, 128));
/// ```
pub fn hsl_to_color(hue: f64, saturation: f64, lightness: f64) -> Color {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Color::normalize(RawColor::new(r * 255.0, g * 255.0, b * 255.0))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
