//! Coordinate mapping between flat char offsets and 2D positions.
//!
//! Offsets are char indices into the buffer rope; an offset equal to
//! `len_chars()` is valid and means "after the last character". Columns here
//! are raw (a tab counts as one column) - tab expansion happens only when
//! mapping to or from absolute screen cells.

use ropey::Rope;

/// Convert a flat offset to raw (col, row).
///
/// Each newline bumps the row and resets the column; every other char,
/// tabs included, advances the column by one.
pub fn offset_to_row_col(content: &Rope, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len_chars());
    let row = content.char_to_line(offset);
    let col = offset - content.line_to_char(row);
    (col, row)
}

/// Convert raw (col, row) back to a flat offset, clamping both axes.
///
/// Lines run up to and including their terminating newline. The final line
/// gets one synthetic "after last char" slot; content ending in a newline
/// gets a synthetic empty last line (ropey's line model provides it).
/// `row` clamps to the last line, `col` to the line's last addressable
/// position. Empty content maps to 0.
pub fn row_col_to_offset(content: &Rope, col: usize, row: usize) -> usize {
    if content.len_chars() == 0 {
        return 0;
    }
    let row = row.min(content.len_lines().saturating_sub(1));
    content.line_to_char(row) + col.min(last_addressable_col(content, row))
}

/// Map an absolute screen cell to raw buffer (col, row).
///
/// Subtracts the text-area origin, adds the scroll offset, clamping negative
/// results to 0. The row snaps to the last line; the column resolves through
/// per-char visual slots where a tab occupies `tab_width` consecutive cells
/// all mapping back to the tab itself, so a click anywhere inside a tab's
/// rendered width selects that tab. Past-the-end columns clamp to the line's
/// last addressable position.
pub fn screen_to_row_col(
    content: &Rope,
    screen: (usize, usize),
    origin: (usize, usize),
    scroll: (usize, usize),
    tab_width: usize,
) -> (usize, usize) {
    if content.len_chars() == 0 {
        return (0, 0);
    }

    let x = screen.0.saturating_sub(origin.0) + scroll.0;
    let y = screen.1.saturating_sub(origin.1) + scroll.1;
    let row = y.min(content.len_lines().saturating_sub(1));

    let mut visual = 0;
    for (i, ch) in content.line(row).chars().enumerate() {
        if ch == '\n' {
            break;
        }
        let w = char_width(ch, tab_width);
        if x < visual + w {
            return (i, row);
        }
        visual += w;
    }

    (last_addressable_col(content, row), row)
}

/// Rendered column of an offset with tabs expanded to `tab_width` cells.
/// Used for cursor placement and horizontal scroll clamping.
pub fn visual_col(content: &Rope, offset: usize, tab_width: usize) -> usize {
    let offset = offset.min(content.len_chars());
    let row = content.char_to_line(offset);
    let line_start = content.line_to_char(row);
    content
        .slice(line_start..offset)
        .chars()
        .map(|ch| char_width(ch, tab_width))
        .sum()
}

/// Last raw column a cursor may occupy on `row`: the newline itself for
/// terminated lines, one past the last char for the final line.
pub fn last_addressable_col(content: &Rope, row: usize) -> usize {
    let line = content.line(row);
    let len = line.len_chars();
    if len > 0 && line.char(len - 1) == '\n' {
        len - 1
    } else {
        len
    }
}

fn char_width(ch: char, tab_width: usize) -> usize {
    if ch == '\t' { tab_width.max(1) } else { 1 }
}
