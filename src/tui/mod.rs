//! Terminal integration layer (crossterm + OSC sequences).
//!
//! Kept apart from `kernel`/`models` so the core stays free of terminal setup.

pub mod osc52;
pub mod terminal_guard;
pub mod view;

pub use terminal_guard::{set_title, TerminalGuard, TerminalRestorer, TerminationSignal};
pub use view::{EventResult, View};
