//! Canonical RGB color and the normalization pipeline.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::ColorError;

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

/// Unchecked RGB input.
///
/// Channels may be out of range or NaN (the stand-in for a field that did not
/// contain a number). Convert to [`Color`] with [`Color::normalize`] before
/// storing or displaying.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawColor {
    /// Red channel, nominally 0..=255
    pub r: f64,
    /// Green channel, nominally 0..=255
    pub g: f64,
    /// Blue channel, nominally 0..=255
    pub b: f64,
}

impl RawColor {
    /// Create raw input from three channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True when no channel is NaN.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !(self.r.is_nan() || self.g.is_nan() || self.b.is_nan())
    }
}

impl From<Color> for RawColor {
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

/// A canonical RGB color.
///
/// Each channel is a whole number in `0.0..=255.0`. The only ways to obtain a
/// `Color` are [`Color::normalize`], [`Color::from_u8`] and the operations
/// built on them, so the invariant holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// `#000000`
    pub const BLACK: Color = Color::from_u8(0, 0, 0);
    /// `#FFFFFF`
    pub const WHITE: Color = Color::from_u8(255, 255, 255);
    /// `#FF0000`
    pub const RED: Color = Color::from_u8(255, 0, 0);
    /// `#FFFF00`
    pub const YELLOW: Color = Color::from_u8(255, 255, 0);
    /// `#00FF00`
    pub const GREEN: Color = Color::from_u8(0, 255, 0);
    /// `#00FFFF`
    pub const CYAN: Color = Color::from_u8(0, 255, 255);
    /// `#0000FF`
    pub const BLUE: Color = Color::from_u8(0, 0, 255);
    /// `#FF00FF`
    pub const MAGENTA: Color = Color::from_u8(255, 0, 255);

    /// Create a color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use hsl_picker::Color;
    /// let teal = Color::from_u8(0, 128, 128);
    /// assert_eq!(teal.g(), 128.0);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Canonicalize raw input.
    ///
    /// Per channel: NaN becomes 0, the value is clamped to `0..=255`,
    /// truncated to 8 decimals, rounded to 3 decimals and then to 2 decimals,
    /// with an integer round after each of the two rounding passes.
    pub fn normalize(raw: RawColor) -> Self {
        Self {
            r: settle_channel(raw.r),
            g: settle_channel(raw.g),
            b: settle_channel(raw.b),
        }
    }

    /// Red channel (whole number, 0..=255)
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green channel (whole number, 0..=255)
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel (whole number, 0..=255)
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Value of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy of this color with one channel replaced, then normalized.
    pub fn with_channel(self, channel: Channel, value: f64) -> Self {
        let mut raw = RawColor::from(self);
        match channel {
            Channel::Red => raw.r = value,
            Channel::Green => raw.g = value,
            Channel::Blue => raw.b = value,
        }
        Self::normalize(raw)
    }

    /// Channels as bytes `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        // Channels are whole numbers in range, the cast is exact.
        [self.r as u8, self.g as u8, self.b as u8]
    }

    /// `#RRGGBB` with uppercase hex digits.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode_upper(self.to_bytes()))
    }

    /// Perceptual luma, `round(0.2126 r + 0.7152 g + 0.0722 b)`.
    pub fn gray(self) -> u8 {
        let luma = 0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b;
        luma.round().clamp(0.0, 255.0) as u8
    }

    /// Per-channel linear interpolation towards `other`, normalized.
    ///
    /// `t` is not clamped; values outside `0..=1` extrapolate and the result
    /// is clamped by normalization.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        Self::normalize(RawColor::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        ))
    }

    /// Channels scaled to `0..=1`.
    #[inline]
    pub(crate) fn unit(self) -> (f64, f64, f64) {
        (self.r / 255.0, self.g / 255.0, self.b / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b] = self.to_bytes();
        let mut state = serializer.serialize_struct("Color", 3)?;
        state.serialize_field("r", &r)?;
        state.serialize_field("g", &g)?;
        state.serialize_field("b", &b)?;
        state.end()
    }
}

/// Truncate `value` towards negative infinity at `precision` decimal places.
///
/// NaN and zero both yield `0.0`. This is the truncation used for the
/// saturation and lightness fields (two places) and for the first step of
/// channel normalization (eight places).
///
/// ```
/// use hsl_picker::color::ensure_number;
/// assert_eq!(ensure_number(41.176_470_588, 2), 41.17);
/// assert_eq!(ensure_number(f64::NAN, 2), 0.0);
/// ```
pub fn ensure_number(value: f64, precision: u32) -> f64 {
    if value == 0.0 || value.is_nan() {
        return 0.0;
    }
    let scale = 10f64.powi(precision as i32);
    (value * scale).floor() / scale
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn settle_channel(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let value = ensure_number(value.clamp(0.0, 255.0), 8);
    let value = round_to(value, 3).round();
    round_to(value, 2).round()
}

/// Canonicalize possibly absent input.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`. Out-of-range and NaN
/// channels are clamped, never rejected.
pub fn normalize(color: impl Into<Option<RawColor>>) -> Result<Color, ColorError> {
    color
        .into()
        .map(Color::normalize)
        .ok_or(ColorError::InvalidColor)
}

/// Normalize and render as `#RRGGBB`.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`.
pub fn pack(color: impl Into<Option<RawColor>>) -> Result<String, ColorError> {
    normalize(color).map(Color::to_hex)
}

/// `a + (b - a) * t`, without clamping `t`.
#[inline]
pub fn lerp_channel(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Per-channel interpolation from `from` to `to`, normalized.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `from` is absent or has a NaN channel.
/// `to` is not validated; NaN channels there normalize to 0.
pub fn lerp_color(
    from: impl Into<Option<RawColor>>,
    to: RawColor,
    t: f64,
) -> Result<Color, ColorError> {
    match from.into() {
        Some(from) if from.is_numeric() => Ok(Color::normalize(RawColor::new(
            lerp_channel(from.r, to.r, t),
            lerp_channel(from.g, to.g, t),
            lerp_channel(from.b, to.b, t),
        ))),
        _ => Err(ColorError::InvalidColor),
    }
}

/// Perceptual grayscale value of the normalized color.
///
/// # Errors
///
/// [`ColorError::InvalidColor`] when `color` is `None`.
pub fn grayscale(color: impl Into<Option<RawColor>>) -> Result<u8, ColorError> {
    normalize(color).map(Color::gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clamps_out_of_range() {
        let color = Color::normalize(RawColor::new(-20.0, 300.0, 1e9));
        assert_eq!(color.to_bytes(), [0, 255, 255]);
    }

    #[test]
    fn test_normalize_replaces_nan() {
        let color = Color::normalize(RawColor::new(f64::NAN, 12.0, f64::NAN));
        assert_eq!(color.to_bytes(), [0, 12, 0]);
    }

    #[test]
    fn test_normalize_produces_whole_numbers() {
        let color = Color::normalize(RawColor::new(127.5, 10.4994, 63.75));
        assert_eq!(color.r(), 128.0);
        assert_eq!(color.g(), 10.0);
        assert_eq!(color.b(), 64.0);
    }

    #[test]
    fn test_normalize_three_place_pass_carries() {
        // The 3-place pass turns 10.4996 into 10.5, which then rounds up.
        let color = Color::normalize(RawColor::new(10.4996, 0.0, 0.0));
        assert_eq!(color.r(), 11.0);
        let color = Color::normalize(RawColor::new(10.4994, 0.0, 0.0));
        assert_eq!(color.r(), 10.0);
    }

    #[test]
    fn test_normalize_absent_input() {
        assert_eq!(normalize(None), Err(ColorError::InvalidColor));
        assert_eq!(
            normalize(RawColor::new(1.0, 2.0, 3.0)),
            Ok(Color::from_u8(1, 2, 3))
        );
    }

    #[test]
    fn test_pack_pads_and_uppercases() {
        assert_eq!(pack(RawColor::new(10.0, 171.0, 0.0)).unwrap(), "#0AAB00");
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(pack(None), Err(ColorError::InvalidColor));
    }

    #[test]
    fn test_pack_normalizes_first() {
        assert_eq!(pack(RawColor::new(255.6, -3.0, 15.49)).unwrap(), "#FF000F");
    }

    #[test]
    fn test_lerp_channel_does_not_clamp_t() {
        assert_eq!(lerp_channel(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp_channel(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp_channel(10.0, 0.0, -1.0), 20.0);
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let mid = lerp_color(RawColor::new(0.0, 0.0, 0.0), RawColor::new(255.0, 100.0, 51.0), 0.5)
            .unwrap();
        assert_eq!(mid.to_bytes(), [128, 50, 26]);
    }

    #[test]
    fn test_lerp_color_extrapolation_is_clamped() {
        let color = Color::BLACK.lerp(Color::WHITE, 3.0);
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn test_lerp_color_rejects_invalid_start() {
        let white = RawColor::new(255.0, 255.0, 255.0);
        assert_eq!(lerp_color(None, white, 0.5), Err(ColorError::InvalidColor));
        assert_eq!(
            lerp_color(RawColor::new(0.0, f64::NAN, 0.0), white, 0.5),
            Err(ColorError::InvalidColor)
        );
    }

    #[test]
    fn test_grayscale_weights() {
        assert_eq!(grayscale(RawColor::new(255.0, 0.0, 0.0)).unwrap(), 54);
        assert_eq!(grayscale(RawColor::new(0.0, 255.0, 0.0)).unwrap(), 182);
        assert_eq!(grayscale(RawColor::new(0.0, 0.0, 255.0)).unwrap(), 18);
        assert_eq!(Color::WHITE.gray(), 255);
        assert_eq!(Color::BLACK.gray(), 0);
        assert_eq!(grayscale(None), Err(ColorError::InvalidColor));
    }

    #[test]
    fn test_ensure_number_truncates() {
        assert_eq!(ensure_number(99.999, 2), 99.99);
        assert_eq!(ensure_number(100.0, 2), 100.0);
        assert_eq!(ensure_number(0.0, 2), 0.0);
        assert_eq!(ensure_number(-0.0, 2), 0.0);
    }

    #[test]
    fn test_with_channel_normalizes() {
        let color = Color::RED.with_channel(Channel::Blue, 400.0);
        assert_eq!(color, Color::MAGENTA);
        let color = Color::RED.with_channel(Channel::Red, 12.4);
        assert_eq!(color.r(), 12.0);
    }
}
