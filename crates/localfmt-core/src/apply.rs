//! Applying edit sequences to text.

use crate::text_edit::OffsetEdit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when an edit sequence cannot be applied.
pub enum EditError {
    #[error("edit starting at {start} overlaps the previous edit ending at {previous_end}")]
    /// Edits must be sorted and must not overlap.
    Overlapping {
        /// End offset of the previous edit.
        previous_end: usize,
        /// Start offset of the offending edit.
        start: usize,
    },

    #[error("edit range {start}..{end} is outside the document ({len} characters)")]
    /// An edit addresses characters past the end of the document.
    OutOfBounds {
        /// Start offset of the offending edit.
        start: usize,
        /// End offset of the offending edit.
        end: usize,
        /// Document length in characters.
        len: usize,
    },
}

/// Apply an ordered, non-overlapping edit sequence to `text`.
///
/// Offsets are character offsets into `text`. Each edit is interpreted against the
/// original text, so the edits do not shift each other.
pub fn apply_offset_edits(text: &str, edits: &[OffsetEdit]) -> Result<String, EditError> {
    let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
    char_to_byte.push(text.len());
    let len = char_to_byte.len() - 1;

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.start > edit.end || edit.end > len {
            return Err(EditError::OutOfBounds {
                start: edit.start,
                end: edit.end,
                len,
            });
        }
        if edit.start < cursor {
            return Err(EditError::Overlapping {
                previous_end: cursor,
                start: edit.start,
            });
        }
        out.push_str(&text[char_to_byte[cursor]..char_to_byte[edit.start]]);
        out.push_str(&edit.new_text);
        cursor = edit.end;
    }
    out.push_str(&text[char_to_byte[cursor]..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_in_order() {
        let edits = vec![
            OffsetEdit::new(0, 0, ">"),
            OffsetEdit::new(1, 3, "é"),
            OffsetEdit::new(4, 4, "!"),
        ];
        assert_eq!(apply_offset_edits("a日本b", &edits).unwrap(), ">aéb!");
    }

    #[test]
    fn test_insert_at_end_counts_chars() {
        // 4 chars, 8 bytes
        let text = "a日本b";
        assert_eq!(
            apply_offset_edits(text, &[OffsetEdit::new(4, 4, "!")]).unwrap(),
            "a日本b!"
        );
        assert!(matches!(
            apply_offset_edits(text, &[OffsetEdit::new(5, 5, "!")]),
            Err(EditError::OutOfBounds { len: 4, .. })
        ));
    }

    #[test]
    fn test_adjacent_edits() {
        let edits = vec![OffsetEdit::new(0, 1, "x"), OffsetEdit::new(1, 2, "y")];
        assert_eq!(apply_offset_edits("ab", &edits).unwrap(), "xy");
    }

    #[test]
    fn test_no_edits() {
        assert_eq!(apply_offset_edits("same", &[]).unwrap(), "same");
    }

    #[test]
    fn test_rejects_overlap() {
        let edits = vec![OffsetEdit::new(0, 3, ""), OffsetEdit::new(2, 4, "")];
        assert_eq!(
            apply_offset_edits("abcdef", &edits),
            Err(EditError::Overlapping {
                previous_end: 3,
                start: 2
            })
        );
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let edits = vec![OffsetEdit::new(2, 9, "")];
        assert!(matches!(
            apply_offset_edits("abc", &edits),
            Err(EditError::OutOfBounds { len: 3, .. })
        ));
    }
}
