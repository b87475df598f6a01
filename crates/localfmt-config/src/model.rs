//! Serialized configuration model.
//!
//! ```json
//! {
//!   "formatters": [
//!     { "command": ["rustfmt", "--emit", "stdout"], "languages": ["rust"] },
//!     {
//!       "command": { "windows": ["fmt.cmd"], "*": ["fmt", "--tab-size", "$tabSize"] },
//!       "languages": ["mylang"],
//!       "cwd": "tools"
//!     }
//!   ]
//! }
//! ```

use crate::error::ConfigError;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key used as the fallback entry of a per-platform command map.
pub const WILDCARD_PLATFORM: &str = "*";

/// The command line used to run a formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// The same argument list on every platform.
    Args(Vec<String>),
    /// Argument lists keyed by platform name, with [`WILDCARD_PLATFORM`] as fallback.
    PerPlatform(BTreeMap<String, Vec<String>>),
}

impl CommandSpec {
    /// Resolve the argument list for `platform`.
    ///
    /// Returns `None` when a per-platform map has neither an entry for the platform nor a
    /// wildcard entry.
    pub fn resolve(&self, platform: &Platform) -> Option<&[String]> {
        match self {
            Self::Args(args) => Some(args),
            Self::PerPlatform(map) => platform
                .lookup_keys()
                .into_iter()
                .find_map(|key| map.get(key))
                .or_else(|| map.get(WILDCARD_PLATFORM))
                .map(Vec::as_slice),
        }
    }
}

/// One configured formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Command template; arguments may contain placeholders such as `$absoluteFilePath`.
    pub command: CommandSpec,
    /// Skip this formatter entirely.
    #[serde(default)]
    pub disabled: bool,
    /// Working directory, relative to the workspace folder unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// Language identifiers this formatter handles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Configured formatters, in priority order.
    #[serde(default, alias = "advancedLocalFormatters.formatters")]
    pub formatters: Vec<FormatterConfig>,
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
