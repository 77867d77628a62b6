//! RAII wrapper for raw mode, alternate screen, and mouse capture.
//! Restores the terminal on drop and from a panic hook, so a crash never
//! leaves the user's shell in raw mode.

use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{cursor, event, execute, terminal};

static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Enters raw mode and the alternate screen on creation, restores the
/// terminal state on drop.
pub struct RawMode {
    original_hook: Option<Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>>,
}

impl RawMode {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            terminal::Clear(terminal::ClearType::All)
        )?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);

        // Restore the terminal before the panic message prints
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            restore_terminal();
            eprintln!("{}", info);
        }));

        Ok(Self {
            original_hook: Some(original_hook),
        })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore_terminal();
        if let Some(hook) = self.original_hook.take() {
            panic::set_hook(hook);
        }
    }
}

fn restore_terminal() {
    if TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
