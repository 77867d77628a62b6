//! Translate crossterm input events into core operations.
//!
//! Keyboard and mouse handling both funnel through `handle_event`. When a
//! prompt is active it captures all key input until Enter or Escape.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Config;
use crate::core::coords;
use crate::core::registry;
use crate::core::selection::ClipSource;
use crate::core::session::EditorSession;
use crate::terminal::TextArea;
use crate::terminal::prompt::{Prompt, PromptKind};

/// Lines moved per mouse wheel notch
const WHEEL_SCROLL_LINES: usize = 3;

/// What the event loop should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Transient host-side UI state: the active prompt, the status message,
/// and the most recent search needle (prefilled on the next find prompt).
#[derive(Debug, Default)]
pub struct EventState {
    pub prompt: Option<Prompt>,
    pub message: Option<String>,
    pub last_search: Option<String>,
}

pub fn handle_event(
    session: &mut EditorSession,
    state: &mut EventState,
    config: &Config,
    area: TextArea,
    event: Event,
) -> Outcome {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if state.prompt.is_some() {
                handle_prompt_key(session, state, config, key);
                Outcome::Continue
            } else {
                handle_key(session, state, config, area, key)
            }
        }
        Event::Mouse(mouse) => {
            handle_mouse(session, config, area, mouse);
            Outcome::Continue
        }
        // The loop re-runs layout and redraws every iteration
        _ => Outcome::Continue,
    }
}

// ==================== Keyboard ====================

fn handle_key(
    session: &mut EditorSession,
    state: &mut EventState,
    config: &Config,
    area: TextArea,
    key: KeyEvent,
) -> Outcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') if ctrl => return Outcome::Exit,
        KeyCode::Char('c') if ctrl => {
            if !session.close_current() {
                return Outcome::Exit;
            }
        }
        KeyCode::Char('s') if ctrl => save_current(session, state),
        KeyCode::Char('o') if ctrl => {
            state.prompt = Some(Prompt::new(PromptKind::Open, "File to open:", ""));
        }
        KeyCode::Char('n') if ctrl => {
            if let Err(e) = session.new_scratch() {
                state.message = Some(e.to_string());
            }
        }
        KeyCode::Char('f') if ctrl => {
            let prefill = state.last_search.clone().unwrap_or_default();
            state.prompt = Some(Prompt::new(PromptKind::Find, "Find:", prefill));
        }
        KeyCode::Char('r') if ctrl => {
            state.prompt = Some(Prompt::new(PromptKind::ReplaceNeedle, "Replace:", ""));
        }
        KeyCode::Char('k') if ctrl => match session.cut() {
            Some(ClipSource::Line) => state.message = Some("Line cut.".into()),
            Some(ClipSource::Selection) => state.message = Some("Selection cut.".into()),
            None => {}
        },
        KeyCode::Char('b') if ctrl => match session.copy() {
            Some(ClipSource::Line) => state.message = Some("Line copied.".into()),
            Some(ClipSource::Selection) => state.message = Some("Selection copied.".into()),
            None => {}
        },
        KeyCode::Char('v') if ctrl => session.paste(),
        KeyCode::Right if ctrl => session.next_buffer(),
        KeyCode::Left if ctrl => session.prev_buffer(),
        KeyCode::Right => move_horizontal(session, 1, shift),
        KeyCode::Left => move_horizontal(session, -1, shift),
        KeyCode::Down => move_vertical(session, 1, shift),
        KeyCode::Up => move_vertical(session, -1, shift),
        KeyCode::PageDown => move_vertical(session, area.height as isize, shift),
        KeyCode::PageUp => move_vertical(session, -(area.height as isize), shift),
        KeyCode::Home => {
            if let Some(buffer) = session.current_mut() {
                let (_, row) = buffer.row_col();
                buffer.clear_selection();
                buffer.set_row_col(0, row);
            }
        }
        KeyCode::End => {
            if let Some(buffer) = session.current_mut() {
                let (_, row) = buffer.row_col();
                buffer.clear_selection();
                buffer.set_row_col(usize::MAX, row);
            }
        }
        KeyCode::Esc => {
            if let Some(buffer) = session.current_mut() {
                buffer.clear_selection();
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = session.current_mut() {
                buffer.delete_backward();
            }
        }
        KeyCode::Enter => insert_text(session, "\n"),
        KeyCode::Tab => insert_text(session, "\t"),
        KeyCode::Char(ch) if !ctrl => {
            if let Some(buffer) = session.current_mut() {
                buffer.insert_at_cursor(&ch.to_string());
            }
        }
        _ => {}
    }

    if let Some(buffer) = session.current_mut() {
        buffer.scroll_to_cursor(area.width, area.height, config.tab_width);
    }
    Outcome::Continue
}

fn insert_text(session: &mut EditorSession, text: &str) {
    if let Some(buffer) = session.current_mut() {
        buffer.insert_at_cursor(text);
    }
}

/// Cursor left/right by one char. With `extend`, grows the selection to
/// the new offset; otherwise any selection is dropped.
fn move_horizontal(session: &mut EditorSession, delta: isize, extend: bool) {
    let Some(buffer) = session.current_mut() else {
        return;
    };
    let target = buffer.cursor().saturating_add_signed(delta);
    if extend {
        buffer.extend_selection_to(target.min(buffer.len_chars()));
    } else {
        buffer.clear_selection();
        buffer.set_cursor(target);
    }
}

/// Cursor up/down by `delta` rows, keeping the raw column where possible.
fn move_vertical(session: &mut EditorSession, delta: isize, extend: bool) {
    let Some(buffer) = session.current_mut() else {
        return;
    };
    let (col, row) = buffer.row_col();
    let target_row = row.saturating_add_signed(delta);
    let target = coords::row_col_to_offset(buffer.content(), col, target_row);
    if extend {
        buffer.extend_selection_to(target);
    } else {
        buffer.clear_selection();
        buffer.set_cursor(target);
    }
}

// ==================== Saving ====================

fn save_current(session: &mut EditorSession, state: &mut EventState) {
    let Some(buffer) = session.current_mut() else {
        return;
    };
    if !buffer.can_save() {
        state.prompt = Some(Prompt::new(PromptKind::SaveAs, "Save buffer to:", ""));
        return;
    }
    match buffer.save() {
        Ok(()) => state.message = Some("File saved.".into()),
        Err(e) => {
            // Detach the bad target so the next save re-prompts
            buffer.clear_backing_path();
            state.message = Some(format!("Could not save file: {e}"));
        }
    }
}

// ==================== Prompts ====================

fn handle_prompt_key(
    session: &mut EditorSession,
    state: &mut EventState,
    config: &Config,
    key: KeyEvent,
) {
    let Some(prompt) = state.prompt.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => state.prompt = None,
        KeyCode::Backspace => prompt.backspace(),
        KeyCode::Enter => {
            if let Some(prompt) = state.prompt.take() {
                resolve_prompt(session, state, config, prompt);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => prompt.push(ch),
        _ => {}
    }
}

fn resolve_prompt(
    session: &mut EditorSession,
    state: &mut EventState,
    config: &Config,
    prompt: Prompt,
) {
    let input = prompt.input.trim().to_string();
    match prompt.kind {
        PromptKind::Open => {
            if input.is_empty() {
                return;
            }
            if let Err(e) = session.open_file(&input, config.open_missing_files) {
                state.message = Some(format!("Could not open file: {e}"));
            }
        }
        PromptKind::SaveAs => {
            if input.is_empty() {
                state.message = Some("No save location was given!".into());
                return;
            }
            let path = match registry::resolve_path(&input) {
                Ok(path) => path,
                Err(e) => {
                    state.message = Some(format!("Could not save file: {e}"));
                    return;
                }
            };
            let Some(buffer) = session.current_mut() else {
                return;
            };
            buffer.set_backing_path(path);
            match buffer.save() {
                Ok(()) => state.message = Some("File saved.".into()),
                Err(e) => {
                    buffer.clear_backing_path();
                    state.message = Some(format!("Could not save file: {e}"));
                }
            }
        }
        PromptKind::Find => {
            if input.is_empty() {
                return;
            }
            state.last_search = Some(input.clone());
            let Some(buffer) = session.current_mut() else {
                return;
            };
            match buffer.find(&input, buffer.cursor()) {
                Some(pos) => {
                    buffer.clear_selection();
                    buffer.set_cursor(pos);
                }
                None => state.message = Some(format!("Not found: {input}")),
            }
        }
        PromptKind::ReplaceNeedle => {
            if !input.is_empty() {
                state.prompt = Some(Prompt::new(
                    PromptKind::ReplaceWith { needle: input },
                    "Replace with:",
                    "",
                ));
            }
        }
        PromptKind::ReplaceWith { needle } => {
            if let Some(buffer) = session.current_mut() {
                let count = buffer.replace_all(&needle, &input);
                state.message = Some(format!("Replaced {count} occurrence(s)."));
            }
        }
    }
}

// ==================== Mouse ====================

fn handle_mouse(session: &mut EditorSession, config: &Config, area: TextArea, mouse: MouseEvent) {
    let Some(buffer) = session.current_mut() else {
        return;
    };
    let screen = (mouse.column as usize, mouse.row as usize);
    let origin = (area.origin_x, area.origin_y);
    let scroll = (buffer.scroll_x, buffer.scroll_y);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (col, row) =
                coords::screen_to_row_col(buffer.content(), screen, origin, scroll, config.tab_width);
            buffer.clear_selection();
            buffer.set_row_col(col, row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let (col, row) =
                coords::screen_to_row_col(buffer.content(), screen, origin, scroll, config.tab_width);
            let offset = coords::row_col_to_offset(buffer.content(), col, row);
            buffer.extend_selection_to(offset);
        }
        // Wheel scrolling moves the viewport without moving the cursor
        MouseEventKind::ScrollUp => {
            buffer.scroll_y = buffer.scroll_y.saturating_sub(WHEEL_SCROLL_LINES);
        }
        MouseEventKind::ScrollDown => {
            let last_row = buffer.content().len_lines().saturating_sub(1);
            buffer.scroll_y = (buffer.scroll_y + WHEEL_SCROLL_LINES).min(last_row);
        }
        _ => {}
    }
}
