//! Range formatting provider interface.
//!
//! A host (editor, language server, CLI) asks a [`RangeFormattingProvider`] for the edits that
//! format part of a document and applies them itself. Providers never mutate the document.

use crate::document::TextDocument;
use crate::text_edit::{Range, TextEdit};

/// Editor preferences forwarded to formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingOptions {
    /// Size of a tab in spaces.
    pub tab_size: u32,
    /// Prefer spaces over tabs.
    pub insert_spaces: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
        }
    }
}

/// Something that can produce formatting edits for a document.
pub trait RangeFormattingProvider {
    /// The error type returned when no edits can be produced.
    type Error;

    /// Compute the edits that format `range` of `document`.
    ///
    /// Returned edits are expressed over `document`, sorted and non-overlapping.
    fn provide_range_formatting_edits(
        &self,
        document: &TextDocument,
        range: Range,
        options: &FormattingOptions,
    ) -> Result<Vec<TextEdit>, Self::Error>;

    /// Compute the edits that format the whole `document`.
    fn provide_document_formatting_edits(
        &self,
        document: &TextDocument,
        options: &FormattingOptions,
    ) -> Result<Vec<TextEdit>, Self::Error> {
        self.provide_range_formatting_edits(document, document.full_range(), options)
    }
}
