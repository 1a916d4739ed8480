//! Picker state handed to refresh observers, and the field text derived
//! from it.

use serde::Serialize;

use crate::color::{ensure_number, Color};

/// Read-only copy of the picker state, handed to refresh observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    /// Authoritative color
    pub color: Color,
    /// Selected hue in degrees, `0..360`
    pub hue: u16,
    /// Saturation percentage
    pub saturation: f64,
    /// Lightness percentage
    pub lightness: f64,
    /// Right edge of the shade gradient. The color given to `set_rgb`, or
    /// the fully saturated color for `hue` after any other hue change.
    pub base: Color,
}

impl Snapshot {
    /// Current color as `#RRGGBB`.
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Perceptual grayscale of the current color.
    pub fn gray(&self) -> u8 {
        self.color.gray()
    }

    /// Shade cursor position `(u, v)` with `v = 1` at the top.
    pub fn shade_cursor(&self) -> (f64, f64) {
        (self.saturation / 100.0, self.lightness / 100.0)
    }

    /// Hue cursor position, `v = 1` at the top of the strip.
    pub fn hue_cursor(&self) -> f64 {
        f64::from(self.hue) / 360.0
    }

    /// Text for each input field of the widget.
    pub fn fields(&self) -> FieldValues {
        let [red, green, blue] = self.color.to_bytes();
        FieldValues {
            red: red.to_string(),
            green: green.to_string(),
            blue: blue.to_string(),
            hue: self.hue.to_string(),
            saturation: ensure_number(self.saturation, 2).to_string(),
            lightness: ensure_number(self.lightness, 2).to_string(),
            hex: self.hex(),
            gray: self.gray().to_string(),
        }
    }
}

/// Input field contents after a refresh.
///
/// Saturation and lightness are truncated, not rounded, to two decimals so
/// a field never shows more than the value it was dragged to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    /// Red channel, `0..=255`
    pub red: String,
    /// Green channel, `0..=255`
    pub green: String,
    /// Blue channel, `0..=255`
    pub blue: String,
    /// Hue in whole degrees
    pub hue: String,
    /// Saturation percentage, at most two decimals
    pub saturation: String,
    /// Lightness percentage, at most two decimals
    pub lightness: String,
    /// `#RRGGBB`
    pub hex: String,
    /// Perceptual grayscale, `0..=255`
    pub gray: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(color: Color, hue: u16, saturation: f64, lightness: f64) -> Snapshot {
        Snapshot {
            color,
            hue,
            saturation,
            lightness,
            base: crate::ramp::color_at_hue(f64::from(hue)),
        }
    }

    #[test]
    fn test_fields_truncate_percentages() {
        let fields = snapshot(Color::from_u8(115, 104, 192), 248, 41.176_470_6, 58.039_215_7)
            .fields();
        assert_eq!(
            fields,
            FieldValues {
                red: "115".into(),
                green: "104".into(),
                blue: "192".into(),
                hue: "248".into(),
                saturation: "41.17".into(),
                lightness: "58.03".into(),
                hex: "#7368C0".into(),
                gray: "113".into(),
            }
        );
    }

    #[test]
    fn test_fields_whole_percentages() {
        let fields = snapshot(Color::RED, 0, 100.0, 50.0).fields();
        assert_eq!(fields.saturation, "100");
        assert_eq!(fields.lightness, "50");
        assert_eq!(fields.gray, "54");
    }

    #[test]
    fn test_cursor_positions() {
        let snap = snapshot(Color::RED, 90, 25.0, 75.0);
        assert_eq!(snap.shade_cursor(), (0.25, 0.75));
        assert_eq!(snap.hue_cursor(), 0.25);
    }
}
