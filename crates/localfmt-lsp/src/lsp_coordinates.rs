//! LSP coordinates (UTF-16 based) and their conversion to `localfmt-core` positions.

use localfmt_core::{Position, Range, TextDocument};

/// LSP Position (based on UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LspPosition {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (UTF-16 code units, 0-based)
    pub character: u32,
}

impl LspPosition {
    /// Create a new LSP position (UTF-16 based).
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// LSP Range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LspRange {
    /// Range start position (inclusive).
    pub start: LspPosition,
    /// Range end position (exclusive).
    pub end: LspPosition,
}

impl LspRange {
    /// Create a new LSP range.
    pub fn new(start: LspPosition, end: LspPosition) -> Self {
        Self { start, end }
    }
}

/// Maps `localfmt-core` char columns to LSP UTF-16 columns and back.
///
/// Characters outside the Basic Multilingual Plane take two UTF-16 units but one char column.
pub struct LspCoordinateConverter;

impl LspCoordinateConverter {
    /// Length of `text` as the LSP counts it, in UTF-16 code units.
    pub fn utf8_to_utf16_len(text: &str) -> usize {
        text.chars().map(char::len_utf16).sum()
    }

    /// UTF-16 column of the character at `char_offset` within one line.
    ///
    /// Offsets past the end of `text` stop at its UTF-16 length.
    pub fn char_offset_to_utf16(text: &str, char_offset: usize) -> usize {
        Self::utf8_to_utf16_len(
            text.char_indices()
                .nth(char_offset)
                .map_or(text, |(byte, _)| &text[..byte]),
        )
    }

    /// Character column for a UTF-16 column within one line.
    ///
    /// A column pointing between the two halves of a surrogate pair rounds up to the next
    /// character. Columns past the end of `text` stop at its character count.
    pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
        let mut units = 0;
        text.chars()
            .take_while(|ch| {
                let inside = units < utf16_offset;
                units += ch.len_utf16();
                inside
            })
            .count()
    }

    /// Convert a document position to an LSP position.
    pub fn position_to_lsp(document: &TextDocument, position: Position) -> LspPosition {
        let position = document.validate_position(position);
        let line_text = document
            .line_index()
            .line_text(position.line)
            .unwrap_or_default();
        let content_len = line_text.chars().count();

        // Columns past the content address the `\n` of a CRLF pair (one UTF-16 unit).
        let utf16 = Self::char_offset_to_utf16(&line_text, position.column)
            + position.column.saturating_sub(content_len);
        LspPosition::new(saturating_u32(position.line), saturating_u32(utf16))
    }

    /// Convert an LSP position to a document position.
    pub fn lsp_to_position(document: &TextDocument, position: LspPosition) -> Position {
        let line = position.line as usize;
        let line_text = document.line_index().line_text(line).unwrap_or_default();
        let character = position.character as usize;
        let content_utf16 = Self::utf8_to_utf16_len(&line_text);
        let column = if character > content_utf16 {
            // clamped by `validate_position` unless it addresses the `\n` of a CRLF pair
            line_text.chars().count() + (character - content_utf16)
        } else {
            Self::utf16_to_char_offset(&line_text, character)
        };
        document.validate_position(Position::new(line, column))
    }

    /// Convert a document range to an LSP range.
    pub fn range_to_lsp(document: &TextDocument, range: Range) -> LspRange {
        LspRange::new(
            Self::position_to_lsp(document, range.start),
            Self::position_to_lsp(document, range.end),
        )
    }

    /// Convert an LSP range to a document range.
    pub fn lsp_to_range(document: &TextDocument, range: &LspRange) -> Range {
        Range::new(
            Self::lsp_to_position(document, range.start),
            Self::lsp_to_position(document, range.end),
        )
    }
}

/// LSP coordinates are `u32`; larger values pin to `u32::MAX` rather than wrapping.
fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_conversion() {
        // "a👋b": a=0..1, 👋=1..3, b=3..4
        let text = "a👋b";
        assert_eq!(LspCoordinateConverter::utf8_to_utf16_len(text), 4);
        assert_eq!(LspCoordinateConverter::char_offset_to_utf16(text, 2), 3);
        assert_eq!(LspCoordinateConverter::utf16_to_char_offset(text, 3), 2);
        assert_eq!(LspCoordinateConverter::utf16_to_char_offset(text, 2), 2);
    }

    #[test]
    fn test_document_positions() {
        let document = TextDocument::new("x\n👋 = 1\n");
        let lsp = LspCoordinateConverter::position_to_lsp(&document, Position::new(1, 2));
        assert_eq!(lsp, LspPosition::new(1, 3));
        assert_eq!(
            LspCoordinateConverter::lsp_to_position(&document, lsp),
            Position::new(1, 2)
        );
        // past the end of the line
        assert_eq!(
            LspCoordinateConverter::lsp_to_position(&document, LspPosition::new(0, 40)),
            Position::new(0, 1)
        );
    }

    #[test]
    fn test_utf16_offsets_past_end() {
        let text = "a👋";
        assert_eq!(LspCoordinateConverter::char_offset_to_utf16(text, 9), 3);
        assert_eq!(LspCoordinateConverter::utf16_to_char_offset(text, 9), 2);
        assert_eq!(LspCoordinateConverter::utf16_to_char_offset(text, 0), 0);
        assert_eq!(LspCoordinateConverter::utf16_to_char_offset("", 4), 0);
    }

    #[test]
    fn test_coordinates_saturate() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(saturating_u32(u32::MAX as usize + 1), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_crlf_interior_position() {
        let document = TextDocument::new("é\r\nz");
        let lsp = LspCoordinateConverter::position_to_lsp(&document, Position::new(0, 2));
        assert_eq!(lsp, LspPosition::new(0, 2));
    }
}
