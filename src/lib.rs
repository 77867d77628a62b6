//! quill - a small terminal text editor.
//!
//! The crate splits into a headless `core` (buffers, cursor, selection,
//! search, the buffer registry and session) and a `terminal` host that
//! renders it with crossterm. The core never touches the terminal, which
//! keeps every editing operation testable without a tty.

pub mod cli;
pub mod config;
pub mod core;
pub mod run;
pub mod terminal;
