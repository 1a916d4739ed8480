//! hsl-picker: color math and state for an interactive RGB/HSL color picker
//!
//! This library converts between RGB and HSL, samples the hue spectrum used by
//! hue strips, and keeps a picker's color, hue, saturation and lightness
//! consistent while a user drags cursors or types into fields.
//!
//! # Quick Start
//!
//! [`ColorPicker`] is the stateful entry point. A front end registers a
//! refresh observer, forwards user input to the mutation methods and redraws
//! from the [`Snapshot`] it receives:
//!
//! ```
//! use hsl_picker::{Color, ColorPicker};
//!
//! let mut picker = ColorPicker::new();
//! picker.on_refresh(|snapshot| println!("now {}", snapshot.hex()));
//!
//! picker.set_rgb(255.0, 0.0, 0.0);
//! assert_eq!(picker.snapshot().hue, 0);
//!
//! picker.set_hue(120.0);
//! assert_eq!(picker.color(), Color::GREEN);
//! ```
//!
//! # Color Math
//!
//! The free functions in [`color`] operate on unchecked [`RawColor`] input
//! and return canonical [`Color`] values:
//!
//! ```
//! use hsl_picker::color::{hsl_to_color, pack, RawColor};
//!
//! let red = hsl_to_color(0.0, 100.0, 50.0);
//! assert_eq!(red.to_hex(), "#FF0000");
//! assert_eq!(pack(RawColor::new(300.0, -4.0, 127.6)).unwrap(), "#FF0080");
//! ```
//!
//! # Canonical Colors
//!
//! Every [`Color`] has been through [`Color::normalize`]: channels are clamped
//! to `0..=255`, NaN becomes 0, and the value is rounded in two passes (three
//! decimals, then two, each followed by an integer round). Channels of a
//! canonical color are therefore whole numbers and pack losslessly into
//! `#RRGGBB`.
//!
//! ## Why Hue Is Stored Separately
//!
//! Hue is undefined for achromatic colors (`r == g == b`). A picker that
//! derived hue from the color alone would snap the hue strip back to red
//! whenever the user dragged saturation to zero or lightness to either end.
//! [`ColorPicker`] therefore keeps hue as its own field: hue changes recompute
//! the color from the stored saturation and lightness, and saturation or
//! lightness changes never touch the hue.
//!
//! | Operation | Short-circuits on equal input | Recomputes hue | New base |
//! |-----------|-------------------------------|----------------|----------|
//! | `set_rgb` | no | yes | the color |
//! | `set_hex` | yes (exact packed hex) | yes | ramp at hue |
//! | `set_channel` | yes | yes | ramp at hue |
//! | `set_hue` | yes (rounded, before clamping) | n/a | ramp at hue |
//! | `set_saturation` / `set_lightness` | no | no | unchanged |
//! | `set_from_pointer` (shade) | no | no | unchanged |
//! | `set_from_pointer` (hue) | as `set_hue` | n/a | ramp at hue |

pub mod color;
pub mod error;
pub mod picker;
pub mod ramp;
pub mod resolve;

#[cfg(test)]
mod domain_tests;

pub use color::{Color, RawColor};
pub use error::ColorError;
pub use picker::{Channel, ColorPicker, FieldValues, GradientRect, Pointer, Snapshot};
pub use ramp::{color_at_hue, shade_row, shade_rows, ShadeRow};
pub use resolve::{parse, ColorResolver, CssResolver};
