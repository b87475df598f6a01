#![warn(missing_docs)]
//! `localfmt-lsp` - LSP encoding for `localfmt-core` edits.
//!
//! `localfmt-core` counts columns in Unicode scalar values; the Language Server Protocol counts
//! them in UTF-16 code units. This crate converts between the two and encodes edits in the
//! LSP `TextEdit` JSON shape, so formatting results can be returned from a
//! `textDocument/rangeFormatting` handler or printed for editor integrations.

pub mod lsp_coordinates;
pub mod lsp_text_edits;

pub use lsp_coordinates::{LspCoordinateConverter, LspPosition, LspRange};
pub use lsp_text_edits::{
    LspTextEdit, from_lsp_text_edits, text_edits_from_value, text_edits_to_value,
    to_lsp_text_edits,
};
