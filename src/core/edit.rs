//! Edit operations on a TextBuffer.
//!
//! Insert, delete-backward, cut, copy, paste, and the search/replace
//! family. Every mutating operation consults the selection first: an active
//! selection is deleted as an inclusive, order-normalized range, the cursor
//! moves to its low edge, and the selection clears.

use crate::core::buffer::TextBuffer;
use crate::core::selection::ClipSource;

impl TextBuffer {
    /// Splice `text` in at the cursor, consuming any active selection
    /// first, and advance the cursor past the inserted text.
    pub fn insert_at_cursor(&mut self, text: &str) {
        self.delete_selection();
        let at = self.cursor();
        self.content_mut().insert(at, text);
        self.set_cursor_raw(at + text.chars().count());
    }

    /// Backspace. With a selection, deletes exactly the selection;
    /// otherwise removes the char before the cursor, if any.
    pub fn delete_backward(&mut self) {
        if self.selection.is_some() {
            self.delete_selection();
            return;
        }
        let at = self.cursor();
        if at > 0 {
            self.content_mut().remove(at - 1..at);
            self.set_cursor_raw(at - 1);
        }
    }

    /// Remove the current line, or the selected range if one is active.
    /// Returns the removed text and what it was.
    pub fn cut(&mut self) -> (String, ClipSource) {
        if self.selection.is_some() {
            let text = self.selected_text();
            self.delete_selection();
            return (text, ClipSource::Selection);
        }

        let (start, end) = self.current_line_span();
        let text = self.content().slice(start..end).to_string();
        self.content_mut().remove(start..end);
        self.set_cursor_raw(start.min(self.len_chars()));
        (text, ClipSource::Line)
    }

    /// Same extraction as [`cut`](Self::cut), without mutating anything.
    pub fn copy(&self) -> (String, ClipSource) {
        if self.selection.is_some() {
            return (self.selected_text(), ClipSource::Selection);
        }
        let (start, end) = self.current_line_span();
        (self.content().slice(start..end).to_string(), ClipSource::Line)
    }

    /// Insert clipboard text at the cursor, consuming any selection first.
    pub fn paste(&mut self, text: &str) {
        self.insert_at_cursor(text);
    }

    /// First occurrence of `needle` strictly after `after` - a match
    /// starting at `after` itself is skipped. `None` when `after` is at or
    /// past the end, or on a miss.
    pub fn find(&self, needle: &str, after: usize) -> Option<usize> {
        if after >= self.len_chars() {
            return None;
        }
        self.find_at(needle, after + 1)
    }

    /// Find via [`find`](Self::find), then splice `replacement` over the
    /// match. Returns the match offset.
    pub fn replace(&mut self, needle: &str, replacement: &str, after: usize) -> Option<usize> {
        let pos = self.find(needle, after)?;
        self.splice(pos, needle.chars().count(), replacement);
        Some(pos)
    }

    /// Replace every occurrence of `needle`, returning the count.
    ///
    /// The first search starts at offset 0; each later search resumes just
    /// past the inserted replacement, so replacements whose text contains
    /// the needle terminate (deleting replacements shrink the content, so
    /// resuming at the match position still makes progress). An empty
    /// needle replaces nothing. Zero matches is a normal `0` outcome.
    pub fn replace_all(&mut self, needle: &str, replacement: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let needle_chars = needle.chars().count();
        let advance = replacement.chars().count();

        let mut count = 0;
        let mut from = 0;
        while let Some(pos) = self.find_at(needle, from) {
            self.splice(pos, needle_chars, replacement);
            count += 1;
            from = pos + advance;
        }
        count
    }

    /// Delete the selection as an inclusive clamped range, moving the
    /// cursor to its low edge. Clears the selection. Returns whether a
    /// selection was consumed.
    pub(crate) fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection.take() else {
            return false;
        };
        if let Some((low, high)) = sel.clamped_edges(self.len_chars()) {
            self.content_mut().remove(low..high + 1);
            self.set_cursor_raw(low);
        }
        true
    }

    /// Span of the cursor's line: back to the previous newline exclusive,
    /// forward to the next newline inclusive or the document end.
    fn current_line_span(&self) -> (usize, usize) {
        let content = self.content();
        let len = content.len_chars();

        let mut start = self.cursor().min(len);
        while start > 0 && content.char(start - 1) != '\n' {
            start -= 1;
        }

        let mut end = self.cursor().min(len);
        while end < len {
            end += 1;
            if content.char(end - 1) == '\n' {
                break;
            }
        }

        (start, end)
    }

    /// First occurrence of `needle` at or after `from`, as a char offset.
    fn find_at(&self, needle: &str, from: usize) -> Option<usize> {
        if from > self.len_chars() {
            return None;
        }
        let tail = self.content().slice(from..).to_string();
        let byte_idx = tail.find(needle)?;
        Some(from + tail[..byte_idx].chars().count())
    }

    fn splice(&mut self, pos: usize, old_chars: usize, replacement: &str) {
        self.content_mut().remove(pos..pos + old_chars);
        self.content_mut().insert(pos, replacement);
        let clamped = self.cursor().min(self.len_chars());
        self.set_cursor_raw(clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::BufferId;
    use crate::core::selection::Selection;

    fn scratch(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::scratch(BufferId(0), "test");
        buffer.insert_at_cursor(text);
        buffer.set_cursor(0);
        buffer
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut buffer = scratch("ad");
        buffer.set_cursor(1);
        buffer.insert_at_cursor("bc");
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_insert_consumes_selection() {
        let mut buffer = scratch("hello world");
        buffer.selection = Some(Selection::new(0, 4)); // "hello"
        buffer.insert_at_cursor("hi");
        assert_eq!(buffer.text(), "hi world");
        assert_eq!(buffer.cursor(), 2);
        assert!(buffer.selection.is_none());
    }

    #[test]
    fn test_delete_backward() {
        let mut buffer = scratch("abc");
        buffer.set_cursor(2);
        buffer.delete_backward();
        assert_eq!(buffer.text(), "ac");
        assert_eq!(buffer.cursor(), 1);

        // At offset 0 nothing happens
        buffer.set_cursor(0);
        buffer.delete_backward();
        assert_eq!(buffer.text(), "ac");
    }

    #[test]
    fn test_delete_backward_selection_only() {
        // With a selection, backspace deletes the selection and nothing more
        let mut buffer = scratch("hello world");
        buffer.set_cursor(4);
        buffer.selection = Some(Selection::new(6, 10)); // "world"
        buffer.delete_backward();
        assert_eq!(buffer.text(), "hello ");
        assert_eq!(buffer.cursor(), 6);
        assert!(buffer.selection.is_none());
    }

    #[test]
    fn test_cut_line_without_selection() {
        let mut buffer = scratch("abc\ndef");
        let (text, source) = buffer.cut();
        assert_eq!(text, "abc\n");
        assert_eq!(source, ClipSource::Line);
        assert_eq!(buffer.text(), "def");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_cut_line_mid_document() {
        let mut buffer = scratch("one\ntwo\nthree");
        buffer.set_row_col(1, 1);
        let (text, _) = buffer.cut();
        assert_eq!(text, "two\n");
        assert_eq!(buffer.text(), "one\nthree");
    }

    #[test]
    fn test_cut_selection() {
        let mut buffer = scratch("hello world");
        buffer.selection = Some(Selection::new(0, 4));
        let (text, source) = buffer.cut();
        assert_eq!(text, "hello");
        assert_eq!(source, ClipSource::Selection);
        assert_eq!(buffer.text(), " world");
        assert_eq!(buffer.cursor(), 0);
        assert!(buffer.selection.is_none());
    }

    #[test]
    fn test_cut_empty_buffer() {
        let mut buffer = scratch("");
        let (text, source) = buffer.cut();
        assert_eq!(text, "");
        assert_eq!(source, ClipSource::Line);
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_copy_does_not_mutate() {
        let mut buffer = scratch("abc\ndef");
        let (text, source) = buffer.copy();
        assert_eq!(text, "abc\n");
        assert_eq!(source, ClipSource::Line);
        assert_eq!(buffer.text(), "abc\ndef");

        buffer.selection = Some(Selection::new(4, 6));
        let (text, source) = buffer.copy();
        assert_eq!(text, "def");
        assert_eq!(source, ClipSource::Selection);
        assert!(buffer.selection.is_some());
    }

    #[test]
    fn test_paste_at_end() {
        let mut buffer = scratch("ab");
        buffer.set_cursor(2);
        buffer.paste("cd");
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), 4);
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut buffer = scratch("hello world");
        buffer.selection = Some(Selection::new(10, 6)); // reversed "world"
        buffer.paste("there");
        assert_eq!(buffer.text(), "hello there");
        assert!(buffer.selection.is_none());
    }

    #[test]
    fn test_find_strictly_after() {
        let buffer = scratch("aXaXa");
        // The match at the start offset itself is skipped
        assert_eq!(buffer.find("a", 0), Some(2));
        assert_eq!(buffer.find("a", 2), Some(4));
        assert_eq!(buffer.find("a", 4), None);
        assert_eq!(buffer.find("a", 99), None);
    }

    #[test]
    fn test_find_miss() {
        let buffer = scratch("hello");
        assert_eq!(buffer.find("xyz", 0), None);
    }

    #[test]
    fn test_find_multibyte() {
        let buffer = scratch("héllo héllo");
        assert_eq!(buffer.find("llo", 3), Some(8));
    }

    #[test]
    fn test_replace() {
        let mut buffer = scratch("foo bar foo");
        assert_eq!(buffer.replace("foo", "qux", 0), Some(8));
        assert_eq!(buffer.text(), "foo bar qux");
        assert_eq!(buffer.replace("foo", "qux", 8), None);
    }

    #[test]
    fn test_replace_all() {
        let mut buffer = scratch("foo bar foo baz foo");
        assert_eq!(buffer.replace_all("foo", "x"), 3);
        assert_eq!(buffer.text(), "x bar x baz x");
    }

    #[test]
    fn test_replace_all_match_at_offset_zero() {
        let mut buffer = scratch("aaa");
        assert_eq!(buffer.replace_all("a", "b"), 3);
        assert_eq!(buffer.text(), "bbb");
    }

    #[test]
    fn test_replace_all_idempotent() {
        let mut buffer = scratch("foo bar");
        assert_eq!(buffer.replace_all("foo", "baz"), 1);
        let after_first = buffer.text();
        assert_eq!(buffer.replace_all("foo", "baz"), 0);
        assert_eq!(buffer.text(), after_first);
    }

    #[test]
    fn test_replace_all_replacement_contains_needle() {
        let mut buffer = scratch("a.a.a");
        assert_eq!(buffer.replace_all("a", "aa"), 3);
        assert_eq!(buffer.text(), "aa.aa.aa");
    }

    #[test]
    fn test_replace_all_empty_needle() {
        let mut buffer = scratch("abc");
        assert_eq!(buffer.replace_all("", "x"), 0);
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn test_replace_all_shrinking() {
        let mut buffer = scratch("xyxyxy");
        assert_eq!(buffer.replace_all("xy", ""), 3);
        assert_eq!(buffer.text(), "");
    }
}
