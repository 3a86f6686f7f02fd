//! Headless application core (state/action/effect).

pub mod action;
pub mod dialog;
pub mod editor;
pub mod effect;
pub mod menu;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, DialogInput};
pub use dialog::{Dialog, FileDialogKind, FileDialogState, MessageDialogState, PrintDialogState};
pub use editor::EditorState;
pub use effect::Effect;
pub use menu::{ActionSpec, MenuEntry, MenuKind};
pub use state::{AppState, DocumentState, MenuState, UiState};
pub use store::{DispatchResult, Store};
