//! Color types and conversion utilities
//!
//! This module provides the canonical [`Color`] type, its unchecked input form
//! [`RawColor`], and the RGB/HSL conversions a picker needs.
//!
//! # Two Layers
//!
//! - Methods on [`Color`] are infallible: a `Color` is canonical by
//!   construction.
//! - The free functions ([`normalize`], [`pack`], [`lerp_color`],
//!   [`grayscale`], [`lightness_of`], [`saturation_of`], [`hue_of`]) accept
//!   possibly absent raw input and report [`ColorError::InvalidColor`]
//!   when there is nothing to convert.
//!
//! # Example
//!
//! ```
//! use hsl_picker::color::{hue_of, normalize, RawColor};
//!
//! let color = normalize(RawColor::new(12.4, 300.0, f64::NAN)).unwrap();
//! assert_eq!(color.to_bytes(), [12, 255, 0]);
//!
//! assert_eq!(hue_of(RawColor::new(0.0, 0.0, 255.0)).unwrap(), 240);
//! assert!(normalize(None).is_err());
//! ```
//!
//! [`ColorError::InvalidColor`]: crate::ColorError::InvalidColor

mod hsl;
mod rgb;

pub use hsl::{hsl_to_color, hue_of, lightness_of, saturation_of};
pub use rgb::{
    ensure_number, grayscale, lerp_channel, lerp_color, normalize, pack, Channel, Color, RawColor,
};
