use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading a formatter configuration.
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    /// The configuration file could not be read.
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    /// The configuration is not valid JSON or does not match the expected shape.
    Json(#[from] serde_json::Error),
}
