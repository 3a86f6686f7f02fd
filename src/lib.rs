//! notepad - a minimal terminal text editor.
//!
//! Modules:
//! - core: commands, input events, service trait
//! - models: text buffer, selection, undo history
//! - kernel: state, actions, effects and the store that reduces them
//! - tui: terminal setup/teardown, OSC52, the `View` seam
//! - app: the workbench (input routing, rendering, effect execution)

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
