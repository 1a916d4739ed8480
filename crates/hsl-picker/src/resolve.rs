//! Resolving color text to RGB.
//!
//! Parsing is split in two steps. A [`ColorResolver`] turns user text into the
//! string a style engine would report as the computed `color` value, and
//! [`parse`] accepts that string only if it is an opaque `rgb(r, g, b)`
//! triple. Anything else (an `rgba(...)` result, an unresolved keyword)
//! is [`ColorError::UnparsableColor`].

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::color::{Color, RawColor};
use crate::error::ColorError;

/// Source of computed color values.
///
/// Implementations return the computed-style form of `input`, e.g.
/// `"rgb(255, 0, 0)"` for `"red"`, or `None` when the input does not resolve.
/// Any `Fn(&str) -> Option<String>` is a resolver.
pub trait ColorResolver {
    /// Resolve `input` the way a style engine computes a `color` property.
    fn computed_style(&self, input: &str) -> Option<String>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn computed_style(&self, input: &str) -> Option<String> {
        self(input)
    }
}

fn rgb_pattern() -> &'static Regex {
    static RGB_PATTERN: OnceLock<Regex> = OnceLock::new();
    RGB_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$")
            .expect("rgb pattern is valid")
    })
}

/// Resolve `input` through `resolver` and extract the RGB triple.
///
/// Extracted channels are clamped to `0..=255`.
///
/// # Errors
///
/// [`ColorError::UnparsableColor`] when the resolver does not know the input
/// or its result does not match `rgb(<int>, <int>, <int>)` exactly.
///
/// # Example
///
/// ```
/// use hsl_picker::{parse, Color, CssResolver};
///
/// let resolver = CssResolver::new();
/// assert_eq!(parse("teal", &resolver).unwrap(), Color::from_u8(0, 128, 128));
/// assert!(parse("transparent", &resolver).is_err());
/// ```
pub fn parse<R>(input: &str, resolver: &R) -> Result<Color, ColorError>
where
    R: ColorResolver + ?Sized,
{
    let unparsable = || ColorError::UnparsableColor(input.to_string());
    let computed = resolver.computed_style(input).ok_or_else(unparsable)?;
    let captures = rgb_pattern().captures(&computed).ok_or_else(unparsable)?;

    let channel = |index: usize| -> f64 {
        captures[index]
            .parse::<u64>()
            .map_or(255.0, |value| value.min(255) as f64)
    };

    Ok(Color::normalize(RawColor::new(
        channel(1),
        channel(2),
        channel(3),
    )))
}

/// Resolver backed by [`csscolorparser`].
///
/// Understands, case-insensitively:
/// - the CSS color keywords
/// - `#RGB`, `#RRGGBB`, `#RGBA` and `#RRGGBBAA` hex notation
/// - `rgb()` and `rgba()` functional notation with integer, decimal or
///   percentage channels
/// - aliases registered with [`CssResolver::alias`]
///
/// Colors with an alpha below 1, `transparent` included, resolve to
/// `rgba(...)`, which [`parse`] rejects. Other functional notations such as
/// `hsl()` do not resolve.
#[derive(Debug, Clone, Default)]
pub struct CssResolver {
    aliases: HashMap<String, String>,
}

impl CssResolver {
    /// Resolver with no aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as another spelling of `value`.
    ///
    /// `value` is resolved without aliases, so aliases cannot chain.
    pub fn alias(mut self, name: &str, value: &str) -> Self {
        self.aliases
            .insert(name.trim().to_lowercase(), value.to_string());
        self
    }

    /// Number of registered aliases.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    fn resolve_builtin(input: &str) -> Option<String> {
        let input = input.trim().to_lowercase();
        if let Some((name, _)) = input.split_once('(') {
            if !matches!(name.trim_end(), "rgb" | "rgba") {
                return None;
            }
        }

        let [r, g, b, a] = csscolorparser::parse(&input).ok()?.to_rgba8();
        if a == u8::MAX {
            Some(format!("rgb({r}, {g}, {b})"))
        } else {
            Some(format!("rgba({r}, {g}, {b}, {})", f64::from(a) / 255.0))
        }
    }
}

impl ColorResolver for CssResolver {
    fn computed_style(&self, input: &str) -> Option<String> {
        let key = input.trim().to_lowercase();
        match self.aliases.get(&key) {
            Some(value) => Self::resolve_builtin(value),
            None => Self::resolve_builtin(&key),
        }
    }
}
