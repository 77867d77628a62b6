//! TextBuffer: one editable document plus its view state.
//!
//! Holds the content rope, the clamped cursor offset, scroll offsets, and
//! the optional selection. Editing operations live in `core::edit`; factory
//! operations (with their uniqueness checks) live in `core::registry`.
//!
//! Content is a single ropey Rope; all offsets in the public API are char
//! offsets, with `len_chars()` itself a valid cursor position meaning
//! "after the last character".

use ropey::Rope;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::core::coords;
use crate::core::error::{EditorError, Result};
use crate::core::id::BufferId;
use crate::core::selection::{self, Selection};

/// How a buffer is backed on disk.
///
/// A buffer whose save target was cleared (for example after a failed save)
/// becomes `Scratch`, so the next save can re-prompt for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferKind {
    /// Loaded from / saved to a resolved absolute path
    FileBacked { path: PathBuf },
    /// No save target; load and save are no-ops
    Scratch,
}

/// One open editable document with its cursor/selection/scroll state.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    id: BufferId,
    name: String,
    kind: BufferKind,
    content: Rope,
    cursor: usize,
    /// Leftmost visible column (visual, tab-expanded)
    pub scroll_x: usize,
    /// Topmost visible row
    pub scroll_y: usize,
    /// Active selection, raw offsets in gesture order
    pub selection: Option<Selection>,
}

impl TextBuffer {
    /// Create a scratch buffer with empty content.
    /// Name uniqueness is the registry's concern.
    pub(crate) fn scratch(id: BufferId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: BufferKind::Scratch,
            content: Rope::new(),
            cursor: 0,
            scroll_x: 0,
            scroll_y: 0,
            selection: None,
        }
    }

    /// Create a file-backed buffer. Content starts empty; the registry
    /// calls `load()` when the file exists.
    pub(crate) fn file_backed(id: BufferId, name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            id,
            name: name.into(),
            kind: BufferKind::FileBacked { path },
            content: Rope::new(),
            cursor: 0,
            scroll_x: 0,
            scroll_y: 0,
            selection: None,
        }
    }

    // ==================== Identity ====================

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Display label, unique among open buffers
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &BufferKind {
        &self.kind
    }

    /// Resolved save target, if any
    pub fn backing_path(&self) -> Option<&Path> {
        match &self.kind {
            BufferKind::FileBacked { path } => Some(path),
            BufferKind::Scratch => None,
        }
    }

    /// Attach a save target (save-as)
    pub fn set_backing_path(&mut self, path: PathBuf) {
        self.kind = BufferKind::FileBacked { path };
    }

    /// Drop the save target, demoting the buffer to a scratch buffer.
    /// Called after a failed save so the next save re-prompts.
    pub fn clear_backing_path(&mut self) {
        self.kind = BufferKind::Scratch;
    }

    pub fn can_save(&self) -> bool {
        matches!(self.kind, BufferKind::FileBacked { .. })
    }

    // ==================== Content Access ====================

    pub fn content(&self) -> &Rope {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut Rope {
        &mut self.content
    }

    /// Total length in chars
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    /// Entire content as an owned string
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    // ==================== Cursor ====================

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the cursor offset, clamped to `[0, len_chars]`
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.content.len_chars());
    }

    pub(crate) fn set_cursor_raw(&mut self, offset: usize) {
        debug_assert!(offset <= self.content.len_chars());
        self.cursor = offset;
    }

    /// Raw (col, row) of the cursor
    pub fn row_col(&self) -> (usize, usize) {
        coords::offset_to_row_col(&self.content, self.cursor)
    }

    /// Move the cursor to a raw (col, row), clamping both axes
    pub fn set_row_col(&mut self, col: usize, row: usize) {
        self.cursor = coords::row_col_to_offset(&self.content, col, row);
    }

    // ==================== Selection ====================

    /// Order-normalized selection edges, `None` without a selection
    pub fn selection_edges(&self) -> Option<(usize, usize)> {
        self.selection.map(|sel| sel.edges())
    }

    /// Selected text, inclusive of both edges; empty without a selection
    pub fn selected_text(&self) -> String {
        match &self.selection {
            Some(sel) => selection::selected_text(&self.content, sel),
            None => String::new(),
        }
    }

    /// Extend the selection to `offset`, creating one anchored at the
    /// current cursor if none is active, and move the cursor along.
    /// Shared by keyboard shift-extension and mouse drag.
    pub fn extend_selection_to(&mut self, offset: usize) {
        let offset = offset.min(self.content.len_chars());
        match &mut self.selection {
            Some(sel) => sel.extend_to(offset),
            None => self.selection = Some(Selection::new(self.cursor, offset)),
        }
        self.cursor = offset;
    }

    /// Drop the selection (unmodified cursor move, click, escape)
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ==================== File Operations ====================

    /// Replace content with the backing file's content, verbatim.
    ///
    /// No-op success for scratch buffers. A read failure reports `Io` and
    /// leaves the prior content untouched. The cursor re-clamps and the
    /// selection clears.
    pub fn load(&mut self) -> Result<()> {
        let path = match &self.kind {
            BufferKind::Scratch => return Ok(()),
            BufferKind::FileBacked { path } => path.clone(),
        };

        let bytes = fs::read(&path).map_err(|e| EditorError::io(&path, e))?;
        self.content = Rope::from_str(&String::from_utf8_lossy(&bytes));
        self.cursor = self.cursor.min(self.content.len_chars());
        self.selection = None;
        Ok(())
    }

    /// Write content to the backing file.
    ///
    /// No-op success for scratch buffers. Content is normalized to end with
    /// exactly one trailing newline (idempotent), then written to a temp
    /// file in the target directory, synced, and atomically renamed into
    /// place - a failed save never leaves a half-written file at the path.
    pub fn save(&mut self) -> Result<()> {
        let path = match &self.kind {
            BufferKind::Scratch => return Ok(()),
            BufferKind::FileBacked { path } => path.clone(),
        };

        let len = self.content.len_chars();
        if len == 0 || self.content.char(len - 1) != '\n' {
            self.content.insert_char(len, '\n');
        }

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| EditorError::io(&path, e))?;
        for chunk in self.content.chunks() {
            temp_file
                .write_all(chunk.as_bytes())
                .map_err(|e| EditorError::io(&path, e))?;
        }
        temp_file.flush().map_err(|e| EditorError::io(&path, e))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| EditorError::io(&path, e))?;
        temp_file
            .persist(&path)
            .map_err(|e| EditorError::io(&path, e.error))?;

        Ok(())
    }

    // ==================== Scrolling ====================

    /// Clamp the scroll offsets so the cursor stays inside a text area of
    /// `width` x `height` cells. Scrolls only when the cursor hits an edge.
    pub fn scroll_to_cursor(&mut self, width: usize, height: usize, tab_width: usize) {
        if width == 0 || height == 0 {
            return;
        }

        let (_, row) = self.row_col();
        if row < self.scroll_y {
            self.scroll_y = row;
        } else if row >= self.scroll_y + height {
            self.scroll_y = row + 1 - height;
        }

        let vcol = coords::visual_col(&self.content, self.cursor, tab_width);
        if vcol < self.scroll_x {
            self.scroll_x = vcol;
        } else if vcol >= self.scroll_x + width {
            self.scroll_x = vcol + 1 - width;
        }
    }
}
