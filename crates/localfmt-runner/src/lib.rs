#![warn(missing_docs)]
//! `localfmt-runner` - run external command-line formatters for `localfmt`.
//!
//! The runner resolves a formatter's command line for a document (placeholder substitution,
//! working directory), pipes the document through the process, and hands the output to
//! `localfmt-core` to compute range-scoped edits.
//!
//! ```no_run
//! use localfmt_config::{Config, FormatterRegistry, Platform};
//! use localfmt_core::{FormattingOptions, RangeFormattingProvider, TextDocument};
//! use localfmt_runner::{ExternalFormatter, FormatContext};
//!
//! let config = Config::from_json_str(
//!     r#"{ "formatters": [ { "command": ["rustfmt", "--emit", "stdout"], "languages": ["rust"] } ] }"#,
//! )?;
//! let (registry, _issues) = FormatterRegistry::from_config(&config, Platform::current());
//!
//! let document = TextDocument::new("fn main(){}\n");
//! let formatter =
//!     ExternalFormatter::from_registry(&registry, "rust", FormatContext::new("src/main.rs"))?;
//! let edits =
//!     formatter.provide_document_formatting_edits(&document, &FormattingOptions::default())?;
//! println!("{} edit(s)", edits.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod context;
mod error;
pub mod formatter;
pub mod placeholders;
pub mod process;

pub use context::FormatContext;
pub use error::FormatError;
pub use formatter::ExternalFormatter;
pub use placeholders::{
    ABSOLUTE_FILE_PATH, INSERT_SPACES, RELATIVE_FILE_PATH, TAB_SIZE, relative_path,
    substitute_placeholders,
};
pub use process::{FORMATTER_OUTPUT_TARGET, run_formatter};
