//! Modal dialogs. Only one is open at a time and it receives all input.

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::DirEntryInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub extension: &'static str,
}

pub const FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        label: "Text Document (*.txt)",
        extension: "txt",
    },
    FileFilter {
        label: "Python (*.py)",
        extension: "py",
    },
    FileFilter {
        label: "Markdown (*.md)",
        extension: "md",
    },
    FileFilter {
        label: "Html (*.html)",
        extension: "html",
    },
];

pub const PARENT_ENTRY: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogKind {
    Open,
    SaveAs,
}

impl FileDialogKind {
    pub fn title(self) -> &'static str {
        match self {
            FileDialogKind::Open => "Open File",
            FileDialogKind::SaveAs => "Save File As",
        }
    }
}

/// What accepting the file dialog resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDialogOutcome {
    Descend(PathBuf),
    Chosen(PathBuf),
    Nothing,
}

#[derive(Debug, Clone)]
pub struct FileDialogState {
    pub kind: FileDialogKind,
    pub dir: PathBuf,
    pub input: String,
    pub entries: Vec<DirEntryInfo>,
    pub selected: usize,
    pub filter: usize,
    pub error: Option<String>,
}

impl FileDialogState {
    pub fn new(kind: FileDialogKind, dir: PathBuf) -> Self {
        Self {
            kind,
            dir,
            input: String::new(),
            entries: Vec::new(),
            selected: 0,
            filter: 0,
            error: None,
        }
    }

    pub fn filter(&self) -> &'static FileFilter {
        &FILE_FILTERS[self.filter % FILE_FILTERS.len()]
    }

    pub fn cycle_filter(&mut self) {
        self.filter = (self.filter + 1) % FILE_FILTERS.len();
        self.selected = 0;
    }

    /// Directories, plus files matching the active filter. A `..` row leads
    /// to the parent directory when there is one.
    pub fn visible_entries(&self) -> Vec<DirEntryInfo> {
        let ext = self.filter().extension;
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        if let Some(parent) = self.dir.parent() {
            out.push(DirEntryInfo {
                name: PARENT_ENTRY.to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }
        out.extend(
            self.entries
                .iter()
                .filter(|e| e.is_dir || e.extension().as_deref() == Some(ext))
                .cloned(),
        );
        out
    }

    pub fn selected_entry(&self) -> Option<DirEntryInfo> {
        self.visible_entries().into_iter().nth(self.selected)
    }

    /// Moves the highlight and mirrors the entry name into the input line.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let visible = self.visible_entries();
        if visible.is_empty() {
            return false;
        }
        let last = visible.len() - 1;
        let next = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize)
        }
        .min(last);
        self.selected = next;
        self.input = visible[next].name.clone();
        true
    }

    pub fn set_entries(&mut self, entries: Vec<DirEntryInfo>) {
        self.entries = entries;
        self.selected = 0;
        self.error = None;
    }

    pub fn enter_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
        self.input.clear();
        self.entries.clear();
        self.selected = 0;
        self.error = None;
    }

    pub fn resolve(&self) -> FileDialogOutcome {
        let input = self.input.trim();
        if input.is_empty() {
            return FileDialogOutcome::Nothing;
        }
        if input == PARENT_ENTRY {
            return match self.dir.parent() {
                Some(parent) => FileDialogOutcome::Descend(parent.to_path_buf()),
                None => FileDialogOutcome::Nothing,
            };
        }
        if input.ends_with('/') || input.ends_with(std::path::MAIN_SEPARATOR) {
            let trimmed = input.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
            let target = if trimmed.is_empty() {
                PathBuf::from(&input[..1])
            } else {
                join(&self.dir, trimmed)
            };
            return FileDialogOutcome::Descend(target);
        }
        if let Some(entry) = self.selected_entry() {
            if entry.is_dir && entry.name == input {
                return FileDialogOutcome::Descend(entry.path);
            }
        }
        FileDialogOutcome::Chosen(join(&self.dir, input))
    }
}

fn join(dir: &Path, input: &str) -> PathBuf {
    let path = Path::new(input);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintDialogState {
    /// Printer name; empty selects the system default.
    pub printer: String,
}

impl PrintDialogState {
    pub fn printer(&self) -> Option<String> {
        let name = self.printer.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialogState {
    pub title: String,
    pub message: String,
}

impl MessageDialogState {
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// 另存为目标已存在时的确认框；取消后回到原来的文件对话框。
#[derive(Debug, Clone)]
pub struct ConfirmOverwriteState {
    pub path: PathBuf,
    pub file: FileDialogState,
}

impl ConfirmOverwriteState {
    pub fn message(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("{name} already exists. Do you want to replace it?")
    }
}

#[derive(Debug, Clone)]
pub enum Dialog {
    File(FileDialogState),
    Print(PrintDialogState),
    Message(MessageDialogState),
    ConfirmOverwrite(ConfirmOverwriteState),
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dialog.rs"]
mod tests;
