//! Logical line index.
//!
//! Provides offset/position conversion over a document using a Rope, supporting O(log N)
//! lookups in both directions. Line breaks are `\n`, `\r\n` and a lone `\r`; other Unicode
//! line separators are treated as ordinary characters, matching what editors and the LSP
//! consider a line break.

use ropey::{Rope, RopeSlice};

/// Logical line index - implemented using Rope data structure
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an index over an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count (an empty document has one line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total byte count
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Character offset at which `line_number` starts.
    ///
    /// Lines past the end map to the end of the document.
    pub fn line_to_char(&self, line_number: usize) -> usize {
        if line_number >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line_number)
    }

    /// Get line number and column from a character offset.
    ///
    /// Offsets past the end are clamped to the end of the document. An offset that falls
    /// between the `\r` and `\n` of a CRLF pair maps to `content_len + 1` on that line.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line_idx = self.rope.char_to_line(char_offset);
        let line_start_char = self.rope.line_to_char(line_idx);

        (line_idx, char_offset - line_start_char)
    }

    /// Get character offset from line number and column number.
    ///
    /// Lines past the end map to the end of the document; columns are clamped to the last
    /// addressable column of the line (the line break itself is only addressable inside a
    /// CRLF pair).
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let slice = self.rope.line(line);
        let break_len = line_break_len(&slice);
        let content_len = slice.len_chars() - break_len;
        let max_column = content_len + break_len.saturating_sub(1);

        self.rope.line_to_char(line) + column.min(max_column)
    }

    /// Character count of `line`, excluding its line break.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        Some(slice.len_chars() - line_break_len(&slice))
    }

    /// Get text of the specified line (excluding its line break)
    pub fn line_text(&self, line: usize) -> Option<String> {
        let len = self.line_len(line)?;
        Some(self.rope.line(line).slice(..len).to_string())
    }

    /// Get complete text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn line_break_len(line: &RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_index() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1); // Rope empty document has 1 line
        assert_eq!(index.byte_count(), 0);
        assert_eq!(index.char_count(), 0);
    }

    #[test]
    fn test_from_text() {
        let text = "Line 1\nLine 2\nLine 3";
        let index = LineIndex::from_text(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.byte_count(), text.len());
        assert_eq!(index.char_count(), text.chars().count());
    }

    #[test]
    fn test_char_offset_to_position() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.char_offset_to_position(0), (0, 0)); // A
        assert_eq!(index.char_offset_to_position(2), (0, 2)); // C
        assert_eq!(index.char_offset_to_position(3), (0, 3)); // \n
        assert_eq!(index.char_offset_to_position(4), (1, 0)); // D
        assert_eq!(index.char_offset_to_position(8), (2, 0)); // G
        assert_eq!(index.char_offset_to_position(11), (2, 3)); // end
        assert_eq!(index.char_offset_to_position(99), (2, 3)); // clamped
    }

    #[test]
    fn test_position_to_char_offset() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.position_to_char_offset(0, 0), 0);
        assert_eq!(index.position_to_char_offset(0, 2), 2);
        assert_eq!(index.position_to_char_offset(1, 0), 4);
        assert_eq!(index.position_to_char_offset(2, 0), 8);
        // column clamped to the line content
        assert_eq!(index.position_to_char_offset(0, 50), 3);
        // line past the end
        assert_eq!(index.position_to_char_offset(7, 0), 11);
    }

    #[test]
    fn test_trailing_newline_creates_empty_line() {
        let index = LineIndex::from_text("a\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.char_offset_to_position(2), (1, 0));
        assert_eq!(index.line_text(1).as_deref(), Some(""));
    }

    #[test]
    fn test_crlf_and_lone_cr() {
        let index = LineIndex::from_text("a\r\nb\rc");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_text(0).as_deref(), Some("a"));
        assert_eq!(index.line_text(1).as_deref(), Some("b"));
        assert_eq!(index.line_text(2).as_deref(), Some("c"));

        // between '\r' and '\n'
        assert_eq!(index.char_offset_to_position(2), (0, 2));
        assert_eq!(index.position_to_char_offset(0, 2), 2);
        assert_eq!(index.position_to_char_offset(0, 3), 2);
        assert_eq!(index.char_offset_to_position(3), (1, 0));
        assert_eq!(index.char_offset_to_position(5), (2, 0));
    }

    #[test]
    fn test_unicode_separators_are_not_line_breaks() {
        let index = LineIndex::from_text("a\u{2028}b\u{000C}c");
        assert_eq!(index.line_count(), 1);
    }

    #[test]
    fn test_utf8_cjk() {
        let text = "你好\n世界";
        let index = LineIndex::from_text(text);

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.byte_count(), text.len());
        assert_eq!(index.char_count(), 5);
        assert_eq!(index.char_offset_to_position(1), (0, 1));
        assert_eq!(index.char_offset_to_position(3), (1, 0));
        assert_eq!(index.line_len(1), Some(2));
    }

    #[test]
    fn test_round_trip_every_offset() {
        let text = "fn main() {\r\n    let x = 1;\n\r}\n";
        let index = LineIndex::from_text(text);
        for offset in 0..=index.char_count() {
            let (line, column) = index.char_offset_to_position(offset);
            assert_eq!(index.position_to_char_offset(line, column), offset);
        }
    }

    #[test]
    fn test_large_document() {
        let text = (0..10000)
            .map(|i| format!("Line {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let index = LineIndex::from_text(&text);
        assert_eq!(index.line_count(), 10000);
        assert_eq!(index.line_text(5000).as_deref(), Some("Line 5000"));
    }
}
