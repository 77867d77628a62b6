//! Terminal host: raw-mode guard, event translation, and rendering on top
//! of the headless core.

pub mod events;
pub mod prompt;
pub mod raw;
pub mod render;

use crate::config::Config;

/// Gutter width in cells when the line index is shown
pub const LINE_INDEX_WIDTH: usize = 4;

/// The on-screen rectangle available for buffer text, excluding the
/// line-index gutter and the status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextArea {
    pub origin_x: usize,
    pub origin_y: usize,
    pub width: usize,
    pub height: usize,
}

/// Compute the text area for a terminal of `cols` x `rows` cells.
/// The bottom row is reserved for the status/prompt line.
pub fn layout(cols: u16, rows: u16, config: &Config) -> TextArea {
    let gutter = if config.show_line_index {
        LINE_INDEX_WIDTH
    } else {
        0
    };
    TextArea {
        origin_x: gutter,
        origin_y: 0,
        width: (cols as usize).saturating_sub(gutter),
        height: (rows as usize).saturating_sub(1),
    }
}
