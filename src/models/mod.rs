//! Data models for the text surface.

pub mod edit_history;
pub mod edit_op;
pub mod selection;
pub mod text_buffer;

pub use edit_history::EditHistory;
pub use edit_op::{EditOp, OpId, OpKind};
pub use selection::Selection;
pub use text_buffer::{slice_to_cow, strip_line_break, TextBuffer};
