//! EditorSession: the owning root of edit-session state.
//!
//! One session owns the buffer registry, the current-buffer reference, and
//! the clipboard. Commands take `&mut EditorSession` rather than reaching
//! for process-wide state. Created at startup, dropped at exit.

use crate::core::buffer::TextBuffer;
use crate::core::error::{EditorError, Result};
use crate::core::id::BufferId;
use crate::core::registry::BufferRegistry;
use crate::core::selection::ClipSource;

/// Edit-session state: registry, current buffer, clipboard.
#[derive(Debug, Default)]
pub struct EditorSession {
    pub registry: BufferRegistry,
    current: Option<BufferId>,
    clipboard: Option<(String, ClipSource)>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Current Buffer ====================

    pub fn current_id(&self) -> Option<BufferId> {
        self.current
    }

    pub fn current(&self) -> Option<&TextBuffer> {
        self.registry.get(self.current?)
    }

    pub fn current_mut(&mut self) -> Option<&mut TextBuffer> {
        let id = self.current?;
        self.registry.get_mut(id)
    }

    /// Make `id` current if it is open
    pub fn switch_to(&mut self, id: BufferId) {
        if self.registry.get(id).is_some() {
            self.current = Some(id);
        }
    }

    pub fn next_buffer(&mut self) {
        if let Some(id) = self.current {
            self.current = self.registry.next_after(id);
        }
    }

    pub fn prev_buffer(&mut self) {
        if let Some(id) = self.current {
            self.current = self.registry.prev_before(id);
        }
    }

    // ==================== Buffer Lifecycle ====================

    /// Open a file and make it current. Opening a path that is already
    /// open in another buffer switches to that buffer instead of failing.
    pub fn open_file(&mut self, raw: &str, tolerate_missing: bool) -> Result<BufferId> {
        match self.registry.open_file(raw, tolerate_missing) {
            Ok(id) => {
                self.current = Some(id);
                Ok(id)
            }
            Err(EditorError::DuplicatePath(path)) => {
                match self.registry.get_by_path(&path).map(|b| b.id()) {
                    Some(id) => {
                        self.current = Some(id);
                        Ok(id)
                    }
                    None => Err(EditorError::DuplicatePath(path)),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Create a fresh "New File N" scratch buffer and make it current.
    pub fn new_scratch(&mut self) -> Result<BufferId> {
        let name = self.registry.fresh_name();
        let id = self.registry.create_scratch(&name)?;
        self.current = Some(id);
        Ok(id)
    }

    /// Close the current buffer, switching to the registry's fallback.
    /// Returns false when no buffers remain and the session should end.
    pub fn close_current(&mut self) -> bool {
        let Some(id) = self.current else {
            return !self.registry.is_empty();
        };
        self.current = self.registry.close(id);
        self.current.is_some()
    }

    // ==================== Clipboard ====================

    pub fn clipboard(&self) -> Option<&(String, ClipSource)> {
        self.clipboard.as_ref()
    }

    /// Cut the current line or selection into the clipboard
    pub fn cut(&mut self) -> Option<ClipSource> {
        let buffer = self.current_mut()?;
        let (text, source) = buffer.cut();
        self.clipboard = Some((text, source));
        Some(source)
    }

    /// Copy the current line or selection into the clipboard
    pub fn copy(&mut self) -> Option<ClipSource> {
        let buffer = self.current()?;
        let (text, source) = buffer.copy();
        self.clipboard = Some((text, source));
        Some(source)
    }

    /// Paste the clipboard at the cursor of the current buffer
    pub fn paste(&mut self) {
        let Some((text, _)) = self.clipboard.clone() else {
            return;
        };
        if let Some(buffer) = self.current_mut() {
            buffer.paste(&text);
        }
    }
}
