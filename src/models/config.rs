use crate::assets::AssetLoader;
use crate::error::ConfigError;
use hsl_picker::{parse, Color, ColorError, ColorPicker, CssResolver, GradientRect};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "shadepick=warn";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Color the picker starts with
    #[serde(default = "default_initial_color")]
    pub initial_color: String,

    /// User-defined color names, resolved through the CSS table
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Rows printed by the shade command
    #[serde(default = "default_shade_rows")]
    pub shade_rows: usize,

    /// Samples printed by the ramp command
    #[serde(default = "default_ramp_steps")]
    pub ramp_steps: usize,

    /// Widget bounds for pointer hit-testing
    #[serde(default)]
    pub widget: WidgetConfig,
}

fn default_initial_color() -> String {
    "red".to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_shade_rows() -> usize {
    8
}

fn default_ramp_steps() -> usize {
    12
}

/// Screen bounds of the shade square and the hue strip
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WidgetConfig {
    #[serde(default = "default_shade_rect")]
    pub shade: GradientRect,

    #[serde(default = "default_strip_rect")]
    pub strip: GradientRect,
}

fn default_shade_rect() -> GradientRect {
    GradientRect::new(0.0, 0.0, 256.0, 256.0)
}

fn default_strip_rect() -> GradientRect {
    GradientRect::new(266.0, 0.0, 20.0, 256.0)
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            shade: default_shade_rect(),
            strip: default_strip_rect(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, reporting read, parse and validation failures
    pub fn try_load(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            colors = config.colors.len(),
            initial_color = %config.initial_color,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        Self::try_load(loader).unwrap_or_else(|e| {
            tracing::warn!(%e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Every alias must resolve through the CSS table on its own.
    fn validate(&self) -> Result<(), ConfigError> {
        let css = CssResolver::new();
        for (name, value) in &self.colors {
            parse(value, &css).map_err(|source| ConfigError::Alias {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// CSS resolver extended with the configured color names
    pub fn resolver(&self) -> CssResolver {
        self.colors
            .iter()
            .fold(CssResolver::new(), |resolver, (name, value)| {
                resolver.alias(name, value)
            })
    }

    /// Resolve the configured initial color
    pub fn initial_color(&self) -> Result<Color, ColorError> {
        parse(&self.initial_color, &self.resolver())
    }

    /// Picker with the configured resolver, set to the initial color
    ///
    /// An unresolvable initial color logs a warning and starts from red.
    pub fn build_picker(&self) -> ColorPicker {
        let mut picker = ColorPicker::with_resolver(self.resolver());
        let start = self.initial_color().unwrap_or_else(|e| {
            tracing::warn!(%e, "Initial color unusable, starting from red");
            Color::RED
        });
        picker.set_rgb(start.r(), start.g(), start.b());
        picker
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_color: default_initial_color(),
            colors: BTreeMap::new(),
            log_filter: default_log_filter(),
            shade_rows: default_shade_rows(),
            ramp_steps: default_ramp_steps(),
            widget: WidgetConfig::default(),
        }
    }
}
