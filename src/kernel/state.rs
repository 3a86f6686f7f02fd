use std::path::{Path, PathBuf};

use crate::kernel::dialog::Dialog;
use crate::kernel::editor::EditorState;
use crate::kernel::menu::{ActionSpec, MenuKind};
use crate::kernel::services::ports::EditorConfig;

pub const APP_NAME: &str = "Notepad";
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub path: Option<PathBuf>,
}

impl DocumentState {
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// `"<basename> - Notepad"`, or `"Untitled - Notepad"` without a path.
    pub fn title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_NAME)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: Option<MenuKind>,
    pub selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn highlighted(&self) -> Option<&'static ActionSpec> {
        let kind = self.open?;
        kind.entries().get(self.selected)?.action()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub menu: MenuState,
    pub dialog: Option<Dialog>,
    /// Transient status-bar message; cleared by the next command.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl UiState {
    pub fn is_modal(&self) -> bool {
        self.dialog.is_some()
    }
}

pub struct AppState {
    pub document: DocumentState,
    pub editor: EditorState,
    pub ui: UiState,
    /// Starting directory for the file dialogs when there is no document path.
    pub cwd: PathBuf,
}

impl AppState {
    pub fn new(cwd: PathBuf, config: EditorConfig) -> Self {
        Self {
            document: DocumentState::default(),
            editor: EditorState::new(config),
            ui: UiState::default(),
            cwd,
        }
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    /// Directory the file dialogs start in.
    pub fn dialog_dir(&self) -> PathBuf {
        self.document
            .path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
