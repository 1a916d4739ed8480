use hsl_picker::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Color alias '{name}' is invalid: {source}")]
    Alias {
        name: String,
        #[source]
        source: ColorError,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
