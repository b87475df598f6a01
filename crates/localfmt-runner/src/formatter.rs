//! External formatters as [`RangeFormattingProvider`]s.

use crate::context::FormatContext;
use crate::error::FormatError;
use crate::placeholders::substitute_placeholders;
use crate::process::run_formatter;
use localfmt_config::{FormatterDefinition, FormatterRegistry};
use localfmt_core::{FormattingOptions, Range, RangeFormattingProvider, TextDocument, TextEdit};
use std::path::PathBuf;
use std::time::Duration;

/// A configured formatter bound to one document location.
///
/// Formatting runs the command on the whole document, diffs the output against the
/// document and keeps the edits that touch the requested range.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    definition: FormatterDefinition,
    context: FormatContext,
    timeout: Option<Duration>,
}

impl ExternalFormatter {
    /// Bind `definition` to the document described by `context`.
    pub fn new(definition: FormatterDefinition, context: FormatContext) -> Self {
        Self {
            definition,
            context,
            timeout: None,
        }
    }

    /// Look up the formatter registered for `language`.
    pub fn from_registry(
        registry: &FormatterRegistry,
        language: &str,
        context: FormatContext,
    ) -> Result<Self, FormatError> {
        let definition = registry
            .formatter_for(language)
            .ok_or_else(|| FormatError::NoFormatter(language.to_string()))?;
        Ok(Self::new(definition.clone(), context))
    }

    /// Kill the formatter if it has not exited within `timeout` of being started.
    ///
    /// Processes the formatter spawned itself are not killed; see [`run_formatter`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The formatter definition in use.
    pub fn definition(&self) -> &FormatterDefinition {
        &self.definition
    }

    /// The working directory the formatter runs in.
    pub fn cwd(&self) -> Option<PathBuf> {
        self.context.resolve_cwd(self.definition.cwd.as_deref())
    }

    /// The command line with placeholders expanded.
    pub fn command_line(&self, options: &FormattingOptions) -> Vec<String> {
        let cwd = self.cwd();
        substitute_placeholders(
            &self.definition.command,
            &self.context.file_path,
            cwd.as_deref(),
            options,
        )
    }

    /// Run the formatter on `text` and return its output.
    pub fn run(&self, text: &str, options: &FormattingOptions) -> Result<String, FormatError> {
        let command = self.command_line(options);
        let cwd = self.cwd();
        run_formatter(&command, cwd.as_deref(), text, self.timeout)
    }
}

impl RangeFormattingProvider for ExternalFormatter {
    type Error = FormatError;

    fn provide_range_formatting_edits(
        &self,
        document: &TextDocument,
        range: Range,
        options: &FormattingOptions,
    ) -> Result<Vec<TextEdit>, Self::Error> {
        let formatted = self.run(document.text(), options)?;
        let edits = document.diff_in_range(&formatted, range);
        log::debug!(
            "formatter #{} produced {} edit(s) in range {}",
            self.definition.index,
            edits.len(),
            range
        );
        Ok(edits)
    }
}
