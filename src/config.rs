// Configuration module
// Resolved editor configuration consumed by the core and the terminal host.
// Parsing a configuration file into this struct is a collaborator concern.

/// Resolved editor configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rendered width of a tab character, in cells
    pub tab_width: usize,
    /// Show the line-number gutter
    pub show_line_index: bool,
    /// Tolerate opening paths that do not exist yet (empty buffer)
    pub open_missing_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            show_line_index: true,
            open_missing_files: true,
        }
    }
}
