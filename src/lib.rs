//! Shadepick - RGB/HSL color picker engine
//!
//! Command-line front end for the `hsl-picker` crate.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
