//! Pointer positions and the gradient rectangles they are measured against.

use serde::{Deserialize, Serialize};

/// A pointer position on one of the picker gradients, normalized per axis.
///
/// Both axes run `0..=1`. `v` is already inverted: 1 is the top edge, which
/// is full lightness on the shade square and hue 360 on the hue strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pointer {
    /// Shade square: `u` is saturation, `v` is lightness.
    Shade { u: f64, v: f64 },
    /// Vertical hue strip.
    Hue { v: f64 },
}

/// Screen-space bounds of a gradient widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientRect {
    /// Left edge in screen units
    pub left: f64,
    /// Top edge, y grows downwards
    pub top: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl GradientRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when `(x, y)` lies inside the rectangle, edges included.
    ///
    /// NaN coordinates are never inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Map `(x, y)` to `(u, v)` in `0..=1`, with `v` inverted.
    ///
    /// Points outside the rectangle are clamped to its edges, so a drag that
    /// leaves the widget keeps tracking the nearest edge. A degenerate axis
    /// (zero or negative extent) maps to 0 before inversion.
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        let u = fraction(x - self.left, self.width);
        let v = 1.0 - fraction(y - self.top, self.height);
        (u, v)
    }

    /// Pointer on a shade square occupying this rectangle.
    pub fn shade_pointer(&self, x: f64, y: f64) -> Pointer {
        let (u, v) = self.normalize(x, y);
        Pointer::Shade { u, v }
    }

    /// Pointer on a hue strip occupying this rectangle. Only `y` matters.
    pub fn hue_pointer(&self, y: f64) -> Pointer {
        let (_, v) = self.normalize(self.left, y);
        Pointer::Hue { v }
    }
}

fn fraction(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
