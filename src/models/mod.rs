pub mod config;

pub use config::{AppConfig, WidgetConfig, DEFAULT_LOG_FILTER};
