#![warn(missing_docs)]
//! `localfmt-core` - turn whole-document formatter output into minimal text edits.
//!
//! # Overview
//!
//! Most command-line formatters read a complete document and print a complete reformatted
//! document. Editors, on the other hand, want small edits: they keep undo history readable,
//! preserve cursors and markers, and let range formatting touch only the requested lines.
//!
//! This crate is the bridge between the two:
//!
//! - [`diff::align`] computes an ordered, non-overlapping edit list between the original text
//!   and the formatter output in a single linear pass, preferring small whitespace-only edits.
//! - [`filter::filter_to_range`] narrows that list to the edits touching a requested range.
//! - [`TextDocument`] converts between character offsets and `(line, column)` positions.
//!
//! # Quick Start
//!
//! ```rust
//! use localfmt_core::{Position, Range, TextDocument};
//!
//! let document = TextDocument::new("let  x=1;\nlet y=2;\n");
//! let formatted = "let x = 1;\nlet y = 2;\n";
//!
//! // Whole document.
//! let edits = document.diff(formatted);
//! assert_eq!(document.apply_edits(&edits).unwrap(), formatted);
//!
//! // Only the first line.
//! let first_line = Range::new(Position::new(0, 0), Position::new(0, 9));
//! let edits = document.diff_in_range(formatted, first_line);
//! assert_eq!(
//!     document.apply_edits(&edits).unwrap(),
//!     "let x = 1;\nlet y=2;\n"
//! );
//! ```
//!
//! # Module Description
//!
//! - [`diff`] - whitespace-aware greedy aligner
//! - [`filter`] - range scoping of edit lists
//! - [`line_index`] - Rope based offset/position conversion
//! - [`document`] - immutable document snapshot
//! - [`apply`] - applying edit lists to text
//! - [`provider`] - range formatting provider interface
//!
//! # Unicode Support
//!
//! Offsets and columns count Unicode scalar values (`char`s), so a step of the aligner never
//! splits a multi-byte character. `localfmt-lsp` converts columns to UTF-16 code units.

pub mod apply;
pub mod diff;
pub mod document;
pub mod filter;
pub mod line_index;
pub mod provider;
pub mod text_edit;

pub use apply::{EditError, apply_offset_edits};
pub use diff::{align, is_whitespace};
pub use document::TextDocument;
pub use filter::{filter_offsets_to_range, filter_to_range};
pub use line_index::LineIndex;
pub use provider::{FormattingOptions, RangeFormattingProvider};
pub use text_edit::{OffsetEdit, Position, Range, TextEdit};
