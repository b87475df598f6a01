//! Whitespace-aware greedy text alignment.
//!
//! [`align`] walks the original text (`before`) and the formatter output (`after`) in
//! lockstep and produces an ordered list of [`OffsetEdit`]s over `before`. It runs in a single
//! forward pass with no backtracking, so time and memory are linear in the combined input
//! length.
//!
//! Formatter output usually differs from its input by whitespace only, so whenever the two
//! sides diverge on a whitespace/non-whitespace boundary the aligner consumes the whitespace
//! side first. That keeps whitespace changes in small edits of their own instead of merging
//! them into the surrounding replacement. When whitespace gives no hint, the side with less
//! remaining input is consumed first so both cursors reach the end at roughly the same rate.
//!
//! The result is not a minimal edit script (pathological inputs such as long runs of a
//! repeated character can yield larger replacements than necessary).

use crate::text_edit::OffsetEdit;

/// Returns `true` for the space character and the ASCII control range `\t`..=`\r`.
pub fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ('\u{09}'..='\u{0D}').contains(&ch)
}

fn is_white(ch: Option<char>) -> bool {
    ch.is_some_and(is_whitespace)
}

/// Which side of the inputs to advance when they diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lean {
    /// Take the next `after` character as inserted text.
    Insertion,
    /// Take the next `before` character into the replaced span.
    Deletion,
}

fn classify(
    before: Option<char>,
    after: Option<char>,
    before_left: usize,
    after_left: usize,
) -> Lean {
    if !is_white(before) && is_white(after) {
        Lean::Insertion
    } else if is_white(before) && !is_white(after) {
        Lean::Deletion
    } else if before_left < after_left {
        Lean::Insertion
    } else {
        Lean::Deletion
    }
}

/// The replacement currently being accumulated: `before[start..stop]` becomes `text`.
struct PendingEdit {
    start: usize,
    stop: usize,
    text: String,
}

impl PendingEdit {
    fn is_point(&self) -> bool {
        self.start == self.stop
    }

    fn anchor(&mut self, offset: usize) {
        self.start = offset;
        self.stop = offset;
    }

    /// Push the pending edit unless it is a no-op. Returns `true` if an edit was pushed.
    fn flush(&mut self, out: &mut Vec<OffsetEdit>) -> bool {
        if self.is_point() && self.text.is_empty() {
            return false;
        }
        out.push(OffsetEdit::new(
            self.start,
            self.stop,
            std::mem::take(&mut self.text),
        ));
        true
    }
}

/// Compute the edits that turn `before` into `after`.
///
/// Offsets in the result are character offsets into `before`. Edits are non-overlapping,
/// sorted, and never no-ops; applying them in order to `before` yields `after`.
pub fn align(before: &str, after: &str) -> Vec<OffsetEdit> {
    let before: Vec<char> = before.chars().collect();
    let after: Vec<char> = after.chars().collect();

    let mut edits = Vec::new();
    let mut pending = PendingEdit {
        start: 0,
        stop: 0,
        text: String::new(),
    };
    let mut i = 0;
    let mut j = 0;

    while i < before.len() || j < after.len() {
        let before_char = before.get(i).copied();
        let after_char = after.get(j).copied();

        if let (Some(b), Some(a)) = (before_char, after_char)
            && b == a
        {
            i += 1;
            j += 1;
            if pending.flush(&mut edits) {
                pending.start = pending.stop;
            }
            if pending.is_point() {
                pending.anchor(i);
            }
            continue;
        }

        if pending.is_point() {
            pending.anchor(i);
        }

        match classify(before_char, after_char, before.len() - i, after.len() - j) {
            Lean::Insertion if j < after.len() => {
                pending.text.push(after[j]);
                j += 1;
            }
            _ if i < before.len() => {
                i += 1;
                pending.stop = i;
            }
            // `before` is exhausted, so `after` still has input.
            _ => {
                pending.text.push(after[j]);
                j += 1;
            }
        }
    }

    pending.flush(&mut edits);
    edits
}
