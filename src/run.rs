//! Terminal-mode entry point: session setup and the blocking event loop.

use std::io;

use crate::config::Config;
use crate::core::session::EditorSession;
use crate::terminal::events::{self, EventState, Outcome};
use crate::terminal::raw::RawMode;
use crate::terminal::{self, render};

/// Run the editor until the user quits or closes the last buffer.
pub fn run(files: &[String], config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = EditorSession::new();
    let mut state = EventState::default();

    for raw in files {
        if let Err(e) = session.open_file(raw, config.open_missing_files) {
            state.message = Some(format!("Could not open file: {e}"));
        }
    }
    if session.registry.is_empty() {
        session.new_scratch()?;
    }
    // The first file named on the command line starts current
    let first = session.registry.iter().next().map(|b| b.id());
    if let Some(first) = first {
        session.switch_to(first);
    }

    let _raw_mode = RawMode::new()?;
    let mut stdout = io::stdout();

    loop {
        let (cols, rows) = crossterm::terminal::size()?;
        let area = terminal::layout(cols, rows, config);
        render::draw(&mut stdout, &session, config, area, &state)?;

        let event = crossterm::event::read()?;
        if events::handle_event(&mut session, &mut state, config, area, event) == Outcome::Exit {
            break;
        }
    }
    Ok(())
}
