//! Frame rendering.
//!
//! Full redraw every frame: line-index gutter, tab-expanded buffer text
//! with selection highlight, a reverse-video status row, and finally the
//! terminal cursor placed over the buffer cursor (or the prompt input).

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color},
    terminal::{self, ClearType},
};

use crate::config::Config;
use crate::core::buffer::TextBuffer;
use crate::core::coords;
use crate::core::session::EditorSession;
use crate::terminal::TextArea;
use crate::terminal::events::EventState;

const SELECTION_BG: Color = Color::DarkBlue;
const GUTTER_FG: Color = Color::DarkGrey;

pub fn draw(
    out: &mut impl Write,
    session: &EditorSession,
    config: &Config,
    area: TextArea,
    state: &EventState,
) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::Hide)?;

    if let Some(buffer) = session.current() {
        if config.show_line_index {
            draw_gutter(out, buffer, area)?;
        }
        draw_text(out, buffer, config, area)?;
    }
    draw_status(out, session.current(), area, state)?;
    place_cursor(out, session.current(), config, area, state)?;

    out.flush()
}

fn draw_gutter(out: &mut impl Write, buffer: &TextBuffer, area: TextArea) -> io::Result<()> {
    let line_count = buffer.content().len_lines();
    queue!(out, style::SetForegroundColor(GUTTER_FG))?;
    for vy in 0..area.height {
        let line_no = buffer.scroll_y + vy + 1;
        if line_no > line_count {
            break;
        }
        queue!(
            out,
            cursor::MoveTo(0, (area.origin_y + vy) as u16),
            style::Print(format!("{line_no:>3} "))
        )?;
    }
    queue!(out, style::ResetColor)
}

/// Draw the visible slice of the buffer, one row at a time. Tabs expand to
/// `tab_width` cells and every cell of a selected tab is highlighted.
fn draw_text(
    out: &mut impl Write,
    buffer: &TextBuffer,
    config: &Config,
    area: TextArea,
) -> io::Result<()> {
    let content = buffer.content();
    let edges = buffer.selection_edges();

    for vy in 0..area.height {
        let row = buffer.scroll_y + vy;
        if row >= content.len_lines() {
            break;
        }
        let line_start = content.line_to_char(row);
        let screen_y = (area.origin_y + vy) as u16;

        // Visual column within the full (unscrolled) line
        let mut vx = 0usize;
        for (i, ch) in content.line(row).chars().enumerate() {
            if ch == '\n' {
                break;
            }
            let width = if ch == '\t' { config.tab_width } else { 1 };
            let selected = edges.is_some_and(|(low, high)| {
                let offset = line_start + i;
                offset >= low && offset <= high
            });

            for cell in 0..width {
                let col = vx + cell;
                if col < buffer.scroll_x {
                    continue;
                }
                let screen_x = col - buffer.scroll_x;
                if screen_x >= area.width {
                    break;
                }
                let glyph = if ch == '\t' { ' ' } else { ch };
                queue!(
                    out,
                    cursor::MoveTo((area.origin_x + screen_x) as u16, screen_y)
                )?;
                if selected {
                    queue!(
                        out,
                        style::SetBackgroundColor(SELECTION_BG),
                        style::Print(glyph),
                        style::ResetColor
                    )?;
                } else {
                    queue!(out, style::Print(glyph))?;
                }
            }
            vx += width;
            if vx >= buffer.scroll_x + area.width {
                break;
            }
        }
    }
    Ok(())
}

/// Bottom row: active prompt, else last message, else buffer info.
fn draw_status(
    out: &mut impl Write,
    buffer: Option<&TextBuffer>,
    area: TextArea,
    state: &EventState,
) -> io::Result<()> {
    let status = if let Some(prompt) = &state.prompt {
        format!("{} {}", prompt.label, prompt.input)
    } else if let Some(message) = &state.message {
        message.clone()
    } else if let Some(buffer) = buffer {
        let (col, row) = buffer.row_col();
        format!(
            "File: {}  Cursor: ({}, {}, {})  Chars: {}",
            buffer.name(),
            col,
            row,
            buffer.cursor(),
            buffer.len_chars()
        )
    } else {
        String::new()
    };

    let status_row = (area.origin_y + area.height) as u16;
    let total_width = area.origin_x + area.width;
    let mut padded: String = status.chars().take(total_width).collect();
    while padded.chars().count() < total_width {
        padded.push(' ');
    }
    queue!(
        out,
        cursor::MoveTo(0, status_row),
        style::SetAttribute(Attribute::Reverse),
        style::Print(padded),
        style::SetAttribute(Attribute::Reset)
    )
}

/// Place and show the terminal cursor: at the prompt input when a prompt
/// is active, otherwise over the buffer cursor when it is in view.
fn place_cursor(
    out: &mut impl Write,
    buffer: Option<&TextBuffer>,
    config: &Config,
    area: TextArea,
    state: &EventState,
) -> io::Result<()> {
    if let Some(prompt) = &state.prompt {
        let x = prompt.label.chars().count() + 1 + prompt.input.chars().count();
        let status_row = (area.origin_y + area.height) as u16;
        return queue!(out, cursor::MoveTo(x as u16, status_row), cursor::Show);
    }

    let Some(buffer) = buffer else {
        return Ok(());
    };
    let (_, row) = buffer.row_col();
    let vcol = coords::visual_col(buffer.content(), buffer.cursor(), config.tab_width);
    let visible_row = row >= buffer.scroll_y && row < buffer.scroll_y + area.height;
    let visible_col = vcol >= buffer.scroll_x && vcol < buffer.scroll_x + area.width;
    if visible_row && visible_col {
        queue!(
            out,
            cursor::MoveTo(
                (area.origin_x + vcol - buffer.scroll_x) as u16,
                (area.origin_y + row - buffer.scroll_y) as u16
            ),
            cursor::Show
        )?;
    }
    Ok(())
}
