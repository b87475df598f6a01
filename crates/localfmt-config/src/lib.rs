#![warn(missing_docs)]
//! `localfmt-config` - data-driven external formatter configuration.
//!
//! This crate stays lightweight: it only knows how formatters are described (a command
//! template per platform, the languages it handles, an optional working directory) and how
//! to turn that description into a [`FormatterRegistry`] for the current platform. Running the
//! command is `localfmt-runner`'s job.
//!
//! Configuration problems never abort loading. They are returned as [`ConfigIssue`]s (and
//! logged through the `log` facade) so a host can surface them while the remaining formatters
//! stay usable.

mod error;
pub mod model;
pub mod platform;
pub mod registry;

pub use error::ConfigError;
pub use model::{CommandSpec, Config, FormatterConfig, WILDCARD_PLATFORM};
pub use platform::Platform;
pub use registry::{ConfigIssue, FormatterDefinition, FormatterRegistry, IssueSeverity};
