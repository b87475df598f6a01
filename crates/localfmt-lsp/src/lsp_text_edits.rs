//! Minimal LSP `TextEdit` helpers.
//!
//! This module intentionally avoids pulling in a full `lsp-types` dependency. It encodes and
//! parses the small subset needed to hand formatting edits to an LSP client
//! (`textDocument/formatting` and `textDocument/rangeFormatting` results).

use crate::lsp_coordinates::{LspCoordinateConverter, LspPosition, LspRange};
use localfmt_core::{TextDocument, TextEdit};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A minimal representation of an LSP `TextEdit`.
pub struct LspTextEdit {
    /// The range to replace (UTF-16 based line/character positions).
    pub range: LspRange,
    /// Replacement text (may contain newlines).
    pub new_text: String,
}

fn position_from_value(value: &Value) -> Option<LspPosition> {
    Some(LspPosition {
        line: u32::try_from(value.get("line")?.as_u64()?).ok()?,
        character: u32::try_from(value.get("character")?.as_u64()?).ok()?,
    })
}

fn position_to_value(position: LspPosition) -> Value {
    json!({ "line": position.line, "character": position.character })
}

impl LspTextEdit {
    /// Parse a `TextEdit`-shaped JSON value.
    pub fn from_value(value: &Value) -> Option<Self> {
        let range_value = value.get("range")?;
        let start = position_from_value(range_value.get("start")?)?;
        let end = position_from_value(range_value.get("end")?)?;

        let new_text = value
            .get("newText")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Some(Self {
            range: LspRange::new(start, end),
            new_text,
        })
    }

    /// Encode as a `TextEdit` JSON value.
    pub fn to_value(&self) -> Value {
        json!({
            "range": {
                "start": position_to_value(self.range.start),
                "end": position_to_value(self.range.end),
            },
            "newText": self.new_text,
        })
    }
}

/// Parse a JSON array of `TextEdit` values, skipping malformed entries.
pub fn text_edits_from_value(value: &Value) -> Vec<LspTextEdit> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(LspTextEdit::from_value)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

/// Encode edits as a JSON array of `TextEdit` values.
pub fn text_edits_to_value(edits: &[LspTextEdit]) -> Value {
    Value::Array(edits.iter().map(LspTextEdit::to_value).collect())
}

/// Convert document edits to LSP edits (UTF-16 columns).
pub fn to_lsp_text_edits(document: &TextDocument, edits: &[TextEdit]) -> Vec<LspTextEdit> {
    edits
        .iter()
        .map(|edit| LspTextEdit {
            range: LspCoordinateConverter::range_to_lsp(document, edit.range),
            new_text: edit.new_text.clone(),
        })
        .collect()
}

/// Convert LSP edits back to document edits (character columns).
pub fn from_lsp_text_edits(document: &TextDocument, edits: &[LspTextEdit]) -> Vec<TextEdit> {
    edits
        .iter()
        .map(|edit| {
            TextEdit::new(
                LspCoordinateConverter::lsp_to_range(document, &edit.range),
                edit.new_text.clone(),
            )
        })
        .collect()
}
