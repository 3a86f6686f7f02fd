//! Text surface state: editing, undo/redo, wrap and viewport.

pub mod layout;
pub mod state;

pub use layout::VisualRow;
pub use state::{EditorState, Viewport};
