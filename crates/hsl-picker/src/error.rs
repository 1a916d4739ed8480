//! Error type for color operations.

use thiserror::Error;

/// Failure of a color-consuming operation.
///
/// Out-of-range or non-numeric channel values are never reported here; they
/// are clamped or replaced during normalization. Only absent input and text
/// that cannot be resolved to an `rgb(r, g, b)` triple are errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was absent, or carried non-numeric channels where a numeric
    /// color is required.
    #[error("color is not valid")]
    InvalidColor,

    /// Text could not be resolved to an `rgb(r, g, b)` triple.
    #[error("color '{0}' could not be parsed")]
    UnparsableColor(String),
}
