//! Resolving a [`Config`] into the formatters usable on this platform.

use crate::model::{Config, FormatterConfig};
use crate::platform::Platform;
use std::fmt;

/// A formatter that passed validation, with its command resolved for the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterDefinition {
    /// Position of the formatter in the configuration.
    pub index: usize,
    /// Language identifiers this formatter handles.
    pub languages: Vec<String>,
    /// Command template for this platform (non-empty).
    pub command: Vec<String>,
    /// Configured working directory, if any.
    pub cwd: Option<String>,
}

impl FormatterDefinition {
    /// Returns `true` if this formatter handles `language`.
    pub fn handles(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// How serious a configuration problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The formatter was skipped for this platform only.
    Warning,
    /// The formatter entry is unusable.
    Error,
}

/// A problem found while building a [`FormatterRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Severity of the problem.
    pub severity: IssueSeverity,
    /// Position of the offending formatter in the configuration.
    pub formatter_index: usize,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Error => "error",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// The set of registered formatters, looked up by language.
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    platform: Platform,
    formatters: Vec<FormatterDefinition>,
}

impl FormatterRegistry {
    /// An empty registry for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            formatters: Vec::new(),
        }
    }

    /// Build a registry from `config`, returning the problems found along the way.
    pub fn from_config(config: &Config, platform: Platform) -> (Self, Vec<ConfigIssue>) {
        let mut registry = Self::new(platform);
        let issues = registry.reload(config);
        (registry, issues)
    }

    /// Replace every registered formatter with the ones in `config`.
    ///
    /// Disabled formatters are skipped silently. Each issue is also logged.
    pub fn reload(&mut self, config: &Config) -> Vec<ConfigIssue> {
        self.formatters.clear();
        let mut issues = Vec::new();

        for (index, formatter) in config.formatters.iter().enumerate() {
            if formatter.disabled {
                log::debug!("formatter #{} is disabled", index);
                continue;
            }
            match self.resolve(index, formatter) {
                Ok(definition) => {
                    log::info!(
                        "registered formatter #{} for languages {:?}: {:?}",
                        index,
                        definition.languages,
                        definition.command
                    );
                    self.formatters.push(definition);
                }
                Err(issue) => {
                    match issue.severity {
                        IssueSeverity::Warning => log::warn!("{}", issue.message),
                        IssueSeverity::Error => log::error!("{}", issue.message),
                    }
                    issues.push(issue);
                }
            }
        }

        issues
    }

    fn resolve(
        &self,
        index: usize,
        formatter: &FormatterConfig,
    ) -> Result<FormatterDefinition, ConfigIssue> {
        let languages = match &formatter.languages {
            Some(languages) if !languages.is_empty() => languages.clone(),
            _ => {
                return Err(ConfigIssue {
                    severity: IssueSeverity::Error,
                    formatter_index: index,
                    message: format!(
                        "Custom formatter #{} does not have any languages defined",
                        index
                    ),
                });
            }
        };

        let command = match formatter.command.resolve(&self.platform) {
            Some(command) if !command.is_empty() => command.to_vec(),
            _ => {
                let languages_json = serde_json::to_string(&languages)
                    .unwrap_or_else(|_| format!("{:?}", languages));
                return Err(ConfigIssue {
                    severity: IssueSeverity::Warning,
                    formatter_index: index,
                    message: format!(
                        "Not registering custom formatter for languages {}, because no command is specified for this platform ({})",
                        languages_json, self.platform
                    ),
                });
            }
        };

        Ok(FormatterDefinition {
            index,
            languages,
            command,
            cwd: formatter.cwd.clone(),
        })
    }

    /// The platform commands are resolved for.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The first registered formatter handling `language`.
    pub fn formatter_for(&self, language: &str) -> Option<&FormatterDefinition> {
        self.formatters.iter().find(|f| f.handles(language))
    }

    /// All registered formatters in configuration order.
    pub fn formatters(&self) -> &[FormatterDefinition] {
        &self.formatters
    }

    /// Number of registered formatters.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}
