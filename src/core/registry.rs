//! BufferRegistry: the ordered collection of open buffers.
//!
//! Buffers are created through the registry's factory operations, which
//! enforce the uniqueness invariants: no two open buffers share a display
//! name, and no two share a resolved absolute path. Insertion order is
//! preserved for next/previous-buffer navigation; lookups are linear, which
//! is fine at interactive buffer counts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::buffer::TextBuffer;
use crate::core::error::{EditorError, Result};
use crate::core::id::BufferId;

/// Ordered collection of open buffers with uniqueness invariants.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    buffers: Vec<TextBuffer>,
    next_id: usize,
}

impl BufferRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Buffers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TextBuffer> {
        self.buffers.iter()
    }

    pub fn get(&self, id: BufferId) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: BufferId) -> Option<&mut TextBuffer> {
        self.buffers.iter_mut().find(|b| b.id() == id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.name() == name)
    }

    pub fn get_by_path(&self, path: &Path) -> Option<&TextBuffer> {
        self.buffers
            .iter()
            .find(|b| b.backing_path() == Some(path))
    }

    // ==================== Factories ====================

    /// Open a file-backed buffer.
    ///
    /// Tilde expansion and absolute-path resolution happen before any
    /// uniqueness check or I/O. With `tolerate_missing` false, a missing
    /// file is an `Io` error and a non-regular file `NotRegularFile`.
    /// Content loads only when the file exists. No failure mutates the
    /// registry.
    pub fn open_file(&mut self, raw: &str, tolerate_missing: bool) -> Result<BufferId> {
        let expanded = expand_tilde(raw);
        let name = expanded.to_string_lossy().into_owned();
        let abs = resolve_absolute(expanded)?;

        let stat = match fs::metadata(&abs) {
            Ok(meta) => Some(meta),
            Err(e) => {
                if !tolerate_missing {
                    return Err(EditorError::io(&abs, e));
                }
                None
            }
        };
        if !tolerate_missing {
            if let Some(meta) = &stat {
                if !meta.is_file() {
                    return Err(EditorError::NotRegularFile(abs));
                }
            }
        }

        if self.get_by_name(&name).is_some() {
            return Err(EditorError::DuplicateName(name));
        }
        if self.get_by_path(&abs).is_some() {
            return Err(EditorError::DuplicatePath(abs));
        }

        let id = self.alloc_id();
        let mut buffer = TextBuffer::file_backed(id, name, abs);
        if stat.is_some() {
            buffer.load()?;
        }
        self.buffers.push(buffer);
        Ok(id)
    }

    /// Create an empty scratch buffer named `name`.
    pub fn create_scratch(&mut self, name: &str) -> Result<BufferId> {
        if self.get_by_name(name).is_some() {
            return Err(EditorError::DuplicateName(name.to_string()));
        }
        let id = self.alloc_id();
        self.buffers.push(TextBuffer::scratch(id, name));
        Ok(id)
    }

    /// Next free "New File N" label for unnamed buffers.
    pub fn fresh_name(&self) -> String {
        let mut number = 1;
        for buffer in &self.buffers {
            if buffer.name().starts_with("New File ") {
                number += 1;
            }
        }
        format!("New File {number}")
    }

    // ==================== Lifecycle ====================

    /// Close a buffer. Returns the buffer to switch to, or `None` when no
    /// buffers remain - the signal for the session to end.
    pub fn close(&mut self, id: BufferId) -> Option<BufferId> {
        if let Some(idx) = self.buffers.iter().position(|b| b.id() == id) {
            self.buffers.remove(idx);
        }
        self.buffers.first().map(|b| b.id())
    }

    /// Buffer after `id` in insertion order, clamped at the end
    pub fn next_after(&self, id: BufferId) -> Option<BufferId> {
        let idx = self.buffers.iter().position(|b| b.id() == id)?;
        let idx = (idx + 1).min(self.buffers.len() - 1);
        Some(self.buffers[idx].id())
    }

    /// Buffer before `id` in insertion order, clamped at the start
    pub fn prev_before(&self, id: BufferId) -> Option<BufferId> {
        let idx = self.buffers.iter().position(|b| b.id() == id)?;
        Some(self.buffers[idx.saturating_sub(1)].id())
    }

    fn alloc_id(&mut self) -> BufferId {
        let id = BufferId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Resolve a user-entered path spelling to the absolute path buffers are
/// keyed by: tilde expansion, then resolution against the working
/// directory. Shared by open and save-as.
pub fn resolve_path(raw: &str) -> Result<PathBuf> {
    resolve_absolute(expand_tilde(raw))
}

/// Replace a leading `~/` with the home directory. A bare `~` is left
/// alone, matching the original behavior.
fn expand_tilde(raw: &str) -> PathBuf {
    if raw != "~" {
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    PathBuf::from(raw)
}

fn resolve_absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| EditorError::io(&path, e))?;
    Ok(cwd.join(path))
}
