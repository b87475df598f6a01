//! Edit and coordinate types shared by every `localfmt` crate.
//!
//! Two coordinate spaces are used:
//! - **character offsets** (Unicode scalar values) over the original document, used by
//!   [`OffsetEdit`] and produced directly by the aligner;
//! - **logical positions** (`line`, `column`), used by [`TextEdit`] and by editor hosts.
//!
//! [`crate::TextDocument`] converts between the two.

use std::cmp::Ordering;
use std::fmt;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of logical positions, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Range start position (inclusive).
    pub start: Position,
    /// Range end position (exclusive).
    pub end: Position,
}

impl Range {
    /// Create a range, swapping the endpoints if they are given in reverse order.
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A zero-width range at `position`.
    pub fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `position` lies within `[start, end]`.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns `true` if the two ranges overlap or touch at a single point.
    pub fn intersects(&self, other: &Range) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// The common part of two ranges, or `None` if they do not intersect.
    ///
    /// Ranges that only touch produce an empty range at the touching point.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Range { start, end })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Replace the text occupying `range` with `new_text`.
///
/// `range.start == range.end` is a pure insertion, an empty `new_text` is a pure deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextEdit {
    /// The range to replace, over the original document.
    pub range: Range,
    /// Replacement text (may contain newlines).
    pub new_text: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Insert `text` at `position`.
    pub fn insert(position: Position, text: impl Into<String>) -> Self {
        Self::new(Range::empty(position), text)
    }

    /// Delete the text in `range`.
    pub fn delete(range: Range) -> Self {
        Self::new(range, String::new())
    }

    /// Returns `true` if applying this edit changes nothing.
    pub fn is_noop(&self) -> bool {
        self.range.is_empty() && self.new_text.is_empty()
    }
}

/// An edit expressed as a half-open character-offset span over the original document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetEdit {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// Replacement text.
    pub new_text: String,
}

impl OffsetEdit {
    /// Create an offset edit. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize, new_text: impl Into<String>) -> Self {
        debug_assert!(start <= end, "offset edit start {start} > end {end}");
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }

    /// Number of original characters this edit replaces.
    pub fn deleted_len(&self) -> usize {
        self.end - self.start
    }

    /// Number of characters this edit inserts.
    pub fn inserted_len(&self) -> usize {
        self.new_text.chars().count()
    }

    /// Returns `true` if applying this edit changes nothing.
    pub fn is_noop(&self) -> bool {
        self.start == self.end && self.new_text.is_empty()
    }

    /// Returns `true` if `[start, end]` intersects `[other_start, other_end]`, touching included.
    pub fn intersects(&self, other_start: usize, other_end: usize) -> bool {
        self.start.max(other_start) <= self.end.min(other_end)
    }
}
