use std::fmt;

use tracing::{debug, trace};

use super::pointer::Pointer;
use super::snapshot::Snapshot;
use crate::color::{hsl_to_color, Channel, Color, RawColor};
use crate::error::ColorError;
use crate::ramp::color_at_hue;
use crate::resolve::{parse, ColorResolver, CssResolver};

type RefreshObserver = Box<dyn FnMut(&Snapshot)>;

/// Interactive picker state.
///
/// Every mutation either short-circuits without touching anything or updates
/// color, hue, saturation, lightness and base together and then notifies
/// each refresh observer exactly once. Mutation methods return whether a
/// refresh happened.
///
/// A fresh picker is white with hue 0, saturation 100 and lightness 100.
/// Applications usually follow construction with [`ColorPicker::set_rgb`].
pub struct ColorPicker {
    color: Color,
    base: Color,
    hue: u16,
    saturation: f64,
    lightness: f64,
    resolver: Box<dyn ColorResolver>,
    observers: Vec<RefreshObserver>,
}

impl ColorPicker {
    /// Picker resolving text with the built-in [`CssResolver`].
    pub fn new() -> Self {
        Self::with_resolver(CssResolver::new())
    }

    /// Picker resolving `set_hex` input with `resolver`.
    pub fn with_resolver<R>(resolver: R) -> Self
    where
        R: ColorResolver + 'static,
    {
        Self {
            color: Color::WHITE,
            base: color_at_hue(0.0),
            hue: 0,
            saturation: 100.0,
            lightness: 100.0,
            resolver: Box::new(resolver),
            observers: Vec::new(),
        }
    }

    /// Register an observer called after every effective mutation.
    pub fn on_refresh<F>(&mut self, observer: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            color: self.color,
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
            base: self.base,
        }
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color and derive hue, saturation and lightness from it.
    /// Channels are normalized first.
    ///
    /// The color itself becomes the base. Always refreshes.
    pub fn set_rgb(&mut self, r: f64, g: f64, b: f64) -> bool {
        let color = Color::normalize(RawColor::new(r, g, b));
        self.adopt_color(color, color);
        true
    }

    /// Replace the color with the one `text` resolves to.
    ///
    /// Blank text, or text equal to the current `#RRGGBB` (exact, case
    /// sensitive), is ignored.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnparsableColor`] when the resolver cannot turn `text`
    /// into an opaque RGB color. The state is left untouched.
    pub fn set_hex(&mut self, text: &str) -> Result<bool, ColorError> {
        let text = text.trim();
        if text.is_empty() || text == self.color.to_hex() {
            trace!(input = text, "hex unchanged");
            return Ok(false);
        }
        let color = parse(text, self.resolver.as_ref())?;
        self.adopt_color(color, color_at_hue(f64::from(color.hue())));
        Ok(true)
    }

    /// Replace one channel and derive hue, saturation, lightness and base.
    ///
    /// NaN, or a value equal to the current channel, is ignored. Other values
    /// are clamped to `0..=255`.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> bool {
        if value.is_nan() || value == self.color.channel(channel) {
            trace!(?channel, value, "channel unchanged");
            return false;
        }
        let color = self.color.with_channel(channel, value);
        self.adopt_color(color, color_at_hue(f64::from(color.hue())));
        true
    }

    /// Select a hue, keeping saturation and lightness.
    ///
    /// `value` is rounded and ignored when NaN or equal to the current hue.
    /// Anything else is clamped to `0..=359` and refreshes, even when the
    /// clamped hue is the current one.
    pub fn set_hue(&mut self, value: f64) -> bool {
        let rounded = value.round();
        if rounded.is_nan() || rounded == f64::from(self.hue) {
            trace!(value, "hue unchanged");
            return false;
        }
        let hue = rounded.clamp(0.0, 359.0) as u16;
        self.hue = hue;
        self.base = color_at_hue(f64::from(hue));
        self.recompute_color();
        true
    }

    /// Set saturation (clamped to `0..=100`), keeping hue and lightness.
    ///
    /// Refreshes even when the value is unchanged. NaN is ignored.
    pub fn set_saturation(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.saturation = value.clamp(0.0, 100.0);
        self.recompute_color();
        true
    }

    /// Set lightness (clamped to `0..=100`), keeping hue and saturation.
    ///
    /// Refreshes even when the value is unchanged. NaN is ignored.
    pub fn set_lightness(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.lightness = value.clamp(0.0, 100.0);
        self.recompute_color();
        true
    }

    /// Apply a normalized pointer position.
    ///
    /// A shade pointer sets saturation from `u` and lightness from `v` in
    /// one refresh. A hue pointer selects `round(v * 360) mod 360` through
    /// [`ColorPicker::set_hue`]. Coordinates are clamped to `0..=1`; NaN
    /// coordinates are ignored.
    pub fn set_from_pointer(&mut self, pointer: Pointer) -> bool {
        match pointer {
            Pointer::Shade { u, v } => {
                if u.is_nan() || v.is_nan() {
                    return false;
                }
                self.saturation = u.clamp(0.0, 1.0) * 100.0;
                self.lightness = v.clamp(0.0, 1.0) * 100.0;
                self.recompute_color();
                true
            }
            Pointer::Hue { v } => {
                if v.is_nan() {
                    return false;
                }
                let hue = (v.clamp(0.0, 1.0) * 360.0).round().rem_euclid(360.0);
                self.set_hue(hue)
            }
        }
    }

    fn adopt_color(&mut self, color: Color, base: Color) {
        self.color = color;
        self.hue = color.hue();
        self.saturation = color.saturation();
        self.lightness = color.lightness();
        self.base = base;
        self.refresh();
    }

    fn recompute_color(&mut self) {
        self.color = hsl_to_color(f64::from(self.hue), self.saturation, self.lightness);
        self.refresh();
    }

    fn refresh(&mut self) {
        let snapshot = self.snapshot();
        debug!(
            hue = snapshot.hue,
            saturation = snapshot.saturation,
            lightness = snapshot.lightness,
            hex = %snapshot.color,
            "picker refreshed"
        );
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &self.color)
            .field("base", &self.base)
            .field("hue", &self.hue)
            .field("saturation", &self.saturation)
            .field("lightness", &self.lightness)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
