//! An immutable document snapshot with position addressing.

use crate::apply::{EditError, apply_offset_edits};
use crate::diff::align;
use crate::filter::filter_to_range;
use crate::line_index::LineIndex;
use crate::text_edit::{OffsetEdit, Position, Range, TextEdit};

/// The text of a document together with its line index.
///
/// The document is never mutated; edits computed against it are applied to produce a new
/// string.
pub struct TextDocument {
    text: String,
    line_index: LineIndex,
}

impl TextDocument {
    /// Create a document snapshot from its full text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_index = LineIndex::from_text(&text);
        Self { text, line_index }
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line index backing position conversion.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.line_index.char_count()
    }

    /// Number of lines (an empty document has one line).
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Convert a character offset to a position (offsets past the end are clamped).
    pub fn position_at(&self, offset: usize) -> Position {
        let (line, column) = self.line_index.char_offset_to_position(offset);
        Position::new(line, column)
    }

    /// Convert a position to a character offset (out-of-range positions are clamped).
    pub fn offset_at(&self, position: Position) -> usize {
        self.line_index
            .position_to_char_offset(position.line, position.column)
    }

    /// Clamp `position` to a valid position in this document.
    pub fn validate_position(&self, position: Position) -> Position {
        self.position_at(self.offset_at(position))
    }

    /// The range covering the whole document.
    pub fn full_range(&self) -> Range {
        Range::new(Position::new(0, 0), self.position_at(self.char_count()))
    }

    /// Map an offset edit onto positions in this document.
    pub fn to_text_edit(&self, edit: &OffsetEdit) -> TextEdit {
        TextEdit::new(
            Range::new(self.position_at(edit.start), self.position_at(edit.end)),
            edit.new_text.clone(),
        )
    }

    /// Map a position-based edit onto character offsets in this document.
    pub fn to_offset_edit(&self, edit: &TextEdit) -> OffsetEdit {
        OffsetEdit::new(
            self.offset_at(edit.range.start),
            self.offset_at(edit.range.end),
            edit.new_text.clone(),
        )
    }

    /// Compute the edits that turn this document into `after`.
    pub fn diff(&self, after: &str) -> Vec<TextEdit> {
        align(&self.text, after)
            .iter()
            .map(|edit| self.to_text_edit(edit))
            .collect()
    }

    /// Diff against a whole-document `after` and keep only the edits touching `range`.
    pub fn diff_in_range(&self, after: &str, range: Range) -> Vec<TextEdit> {
        filter_to_range(&self.diff(after), range)
    }

    /// Apply an ordered, non-overlapping list of edits and return the resulting text.
    pub fn apply_edits(&self, edits: &[TextEdit]) -> Result<String, EditError> {
        let resolved = edits
            .iter()
            .map(|edit| self.to_offset_edit(edit))
            .collect::<Vec<_>>();
        apply_offset_edits(&self.text, &resolved)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
