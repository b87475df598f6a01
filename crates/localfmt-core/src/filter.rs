//! Narrowing a whole-document edit list down to a requested range.
//!
//! External formatters only work on complete documents, so range formatting diffs the whole
//! document once and keeps the edits that touch the requested range.

use crate::text_edit::{OffsetEdit, Range, TextEdit};

/// Keep the edits whose range intersects `range`, preserving their order.
///
/// Ranges that only touch at a single point count as intersecting.
pub fn filter_to_range(edits: &[TextEdit], range: Range) -> Vec<TextEdit> {
    edits
        .iter()
        .filter(|edit| edit.range.intersects(&range))
        .cloned()
        .collect()
}

/// Offset flavour of [`filter_to_range`] over the half-open span `[start, end)`.
pub fn filter_offsets_to_range(edits: &[OffsetEdit], start: usize, end: usize) -> Vec<OffsetEdit> {
    let (start, end) = (start.min(end), start.max(end));
    edits
        .iter()
        .filter(|edit| edit.intersects(start, end))
        .cloned()
        .collect()
}
