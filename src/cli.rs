//! Command-line argument parsing for quill.
//!
//! This module provides the `Cli` struct which encapsulates all
//! command-line options and methods for parsing them.

use crate::config::Config;

/// Command-line interface configuration.
#[derive(Debug, Default)]
pub struct Cli {
    /// File(s) to open
    pub files: Vec<String>,

    /// Tab width override
    pub tab_width: Option<usize>,

    /// Hide the line-number gutter
    pub no_line_index: bool,

    /// Fail instead of creating empty buffers for missing files
    pub strict_open: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Returns a `Cli` struct populated with parsed arguments, or an error
    /// if a flag is unknown or a required value is missing.
    pub fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        let mut cli = Self::default();
        let mut args = std::env::args().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-n" | "--no-line-index" => cli.no_line_index = true,
                "-s" | "--strict-open" => cli.strict_open = true,
                "-t" | "--tab-width" => {
                    if let Some(value) = args.next() {
                        cli.tab_width = Some(value.parse()?);
                    } else {
                        return Err("--tab-width requires a value".into());
                    }
                }
                "-h" | "--help" => {
                    println!("quill - a small terminal text editor");
                    println!();
                    println!("Usage: quill [OPTIONS] [FILES...]");
                    println!();
                    println!("Options:");
                    println!("  -h, --help           Show this help message");
                    println!("  -t, --tab-width N    Rendered tab width (default 4)");
                    println!("  -n, --no-line-index  Hide the line-number gutter");
                    println!("  -s, --strict-open    Fail on missing files instead of");
                    println!("                       starting an empty buffer");
                    std::process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown flag: {}. Use --help for usage.", arg).into());
                }
                _ => {
                    // Positional arguments are files
                    cli.files.push(arg);
                }
            }
        }

        Ok(cli)
    }

    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(tab_width) = self.tab_width {
            config.tab_width = tab_width.max(1);
        }
        if self.no_line_index {
            config.show_line_index = false;
        }
        if self.strict_open {
            config.open_missing_files = false;
        }
    }
}
