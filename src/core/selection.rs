//! Selection model.
//!
//! A selection is a pair of raw char offsets in gesture order - either end
//! may be the larger one, since a drag or shift-extension can run backward.
//! Every range read or delete goes through [`Selection::edges`] first, and
//! ranges are inclusive of both edges. An edge may sit on the synthetic
//! end-of-buffer position, which has no real character; the clamped helpers
//! account for that.

use std::cmp::{max, min};

use ropey::Rope;

/// A text selection: raw start/end offsets in gesture order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Offset where the gesture began (anchor)
    pub start: usize,
    /// Offset where the gesture currently ends
    pub end: usize,
}

impl Selection {
    /// Selection covering the single char at `pos`
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Order-normalized (low, high) edges. Symmetric in start/end.
    pub fn edges(&self) -> (usize, usize) {
        (min(self.start, self.end), max(self.start, self.end))
    }

    /// Inclusive edges clamped to the last real char of a buffer of
    /// `len_chars` chars. `None` when the buffer is empty.
    pub fn clamped_edges(&self, len_chars: usize) -> Option<(usize, usize)> {
        if len_chars == 0 {
            return None;
        }
        let (low, high) = self.edges();
        Some((low.min(len_chars - 1), high.min(len_chars - 1)))
    }

    /// Move the gesture end, keeping the anchor
    pub fn extend_to(&mut self, pos: usize) {
        self.end = pos;
    }
}

/// What a cut or copy captured: the cursor's line, or the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSource {
    Line,
    Selection,
}

/// Text covered by a selection, inclusive of both edges.
/// Empty when the content is empty.
pub fn selected_text(content: &Rope, selection: &Selection) -> String {
    match selection.clamped_edges(content.len_chars()) {
        Some((low, high)) => content.slice(low..high + 1).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_symmetric() {
        assert_eq!(Selection::new(3, 9).edges(), Selection::new(9, 3).edges());
        assert_eq!(Selection::new(9, 3).edges(), (3, 9));
    }

    #[test]
    fn test_point_selects_one_char() {
        let content = Rope::from_str("hello");
        let sel = Selection::point(1);
        assert_eq!(selected_text(&content, &sel), "e");
    }

    #[test]
    fn test_selected_text_inclusive() {
        let content = Rope::from_str("hello world");
        let sel = Selection::new(0, 4);
        assert_eq!(selected_text(&content, &sel), "hello");
        // Reversed gesture covers the same range
        let sel = Selection::new(4, 0);
        assert_eq!(selected_text(&content, &sel), "hello");
    }

    #[test]
    fn test_selected_text_clamps_end_of_buffer() {
        // An edge on the synthetic end-of-buffer position clamps to the
        // last real char.
        let content = Rope::from_str("ab");
        let sel = Selection::new(0, 2);
        assert_eq!(selected_text(&content, &sel), "ab");
    }

    #[test]
    fn test_selected_text_empty_content() {
        let content = Rope::from_str("");
        assert_eq!(selected_text(&content, &Selection::new(0, 3)), "");
    }

    #[test]
    fn test_extend_keeps_anchor() {
        let mut sel = Selection::point(5);
        sel.extend_to(2);
        assert_eq!(sel.start, 5);
        assert_eq!(sel.end, 2);
        assert_eq!(sel.edges(), (2, 5));
    }
}
