//! The headless editing engine: buffers and their coordinate, selection,
//! and edit semantics, plus the registry and session that own them. No
//! terminal I/O happens here - the `terminal` module consumes these types.

pub mod buffer;
pub mod coords;
pub mod edit;
pub mod error;
pub mod id;
pub mod registry;
pub mod selection;
pub mod session;
