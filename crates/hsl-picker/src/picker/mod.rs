//! Picker state and its inputs.
//!
//! [`ColorPicker`] owns the authoritative color together with the hue,
//! saturation and lightness a user selected. Front ends feed it text, channel
//! values and pointer positions, and redraw from the [`Snapshot`] passed to
//! refresh observers.

mod pointer;
mod snapshot;
mod state;

pub use crate::color::Channel;
pub use pointer::{GradientRect, Pointer};
pub use snapshot::{FieldValues, Snapshot};
pub use state::ColorPicker;
