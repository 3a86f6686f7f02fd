use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::menu::MenuKind;
use crate::kernel::services::ports::DirEntryInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogInput {
    Char(char),
    Backspace,
    MoveSelection(isize),
    CycleFilter,
    Accept,
    Cancel,
}

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    InsertText(String),
    EditorResize {
        width: usize,
        height: usize,
    },
    OpenPath(PathBuf),
    Dialog(DialogInput),
    DirLoaded {
        dir: PathBuf,
        entries: Vec<DirEntryInfo>,
    },
    DirLoadError {
        dir: PathBuf,
        message: String,
    },
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadFailed {
        message: String,
    },
    FileSaved {
        path: PathBuf,
        adopt_path: bool,
    },
    FileSaveFailed {
        message: String,
    },
    SaveTargetChecked {
        path: PathBuf,
        exists: bool,
    },
    MenuOpen(MenuKind),
    MenuMove(isize),
    MenuSwitch(isize),
    MenuActivate,
    MenuClose,
}
