//! Core vocabulary shared by the kernel and the frontend:
//! - Command: semantic commands
//! - Event: normalized input events and key chords

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key};
