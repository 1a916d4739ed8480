//! Hue ramp and shade gradient sampling.
//!
//! The hue strip is a piecewise-linear ramp through the six primary and
//! secondary colors. The shade square blends white, the base hue color and
//! black; each of its rows is a horizontal gradient described by a
//! [`ShadeRow`].

use serde::Serialize;

use crate::color::Color;

/// Reference stops of the hue ramp at 0, 60, ..., 360 degrees.
pub const HUE_STOPS: [Color; 7] = [
    Color::RED,
    Color::YELLOW,
    Color::GREEN,
    Color::CYAN,
    Color::BLUE,
    Color::MAGENTA,
    Color::RED,
];

/// Stops of the vertical hue strip, top to bottom.
///
/// The strip runs against the ramp so that hue increases upwards, matching
/// the inverted pointer axis of [`Pointer::Hue`](crate::Pointer::Hue).
pub const HUE_STRIP_STOPS: [(f64, Color); 7] = [
    (0.0, Color::RED),
    (1.0 / 6.0, Color::MAGENTA),
    (2.0 / 6.0, Color::BLUE),
    (3.0 / 6.0, Color::CYAN),
    (4.0 / 6.0, Color::GREEN),
    (5.0 / 6.0, Color::YELLOW),
    (1.0, Color::RED),
];

/// Fully saturated, mid-lightness color for `hue` degrees.
///
/// `hue` is expected in `0..360`. Values outside are reduced modulo 360, so
/// 360 samples the same stop as 0.
///
/// ```
/// use hsl_picker::{color_at_hue, Color};
/// assert_eq!(color_at_hue(0.0), Color::RED);
/// assert_eq!(color_at_hue(180.0), Color::CYAN);
/// assert_eq!(color_at_hue(30.0), Color::from_u8(255, 128, 0));
/// ```
pub fn color_at_hue(hue: f64) -> Color {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.
    let hue = if hue >= 360.0 { 0.0 } else { hue };
    let segment = ((hue / 60.0).floor() as usize).min(HUE_STOPS.len() - 2);
    let t = (hue % 60.0) / 60.0;
    HUE_STOPS[segment].lerp(HUE_STOPS[segment + 1], t)
}

/// Endpoints of one horizontal row of the shade gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadeRow {
    /// Row position, 0 at the top and 1 at the bottom
    pub t: f64,
    /// Fully desaturated edge (white to black)
    pub left: Color,
    /// Fully saturated edge (white to base to black)
    pub right: Color,
}

/// Endpoints of the shade row at position `t`.
///
/// The left edge fades white to black over the whole height. The right edge
/// fades white to `base` over the top half and `base` to black over the
/// bottom half.
pub fn shade_row(base: Color, t: f64) -> ShadeRow {
    let left = Color::WHITE.lerp(Color::BLACK, t);
    let right = if t < 0.5 {
        Color::WHITE.lerp(base, t * 2.0)
    } else {
        base.lerp(Color::BLACK, t * 2.0 - 1.0)
    };
    ShadeRow { t, left, right }
}

/// `rows` evenly spaced shade rows, `t = (i + 1) / rows`.
pub fn shade_rows(base: Color, rows: usize) -> Vec<ShadeRow> {
    (0..rows)
        .map(|i| shade_row(base, (i + 1) as f64 / rows as f64))
        .collect()
}
