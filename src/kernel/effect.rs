use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFile(PathBuf),
    /// Lists a directory for the open file dialog.
    ListDir(PathBuf),
    WriteFile {
        path: PathBuf,
        text: String,
        /// Adopt `path` as the document path once written (save-as).
        adopt_path: bool,
    },
    /// Asks whether a save-as target already exists before writing it.
    CheckSaveTarget(PathBuf),
    SetClipboardText(String),
    RequestClipboardText,
    Print {
        printer: Option<String>,
        text: String,
    },
    Screenshot,
    SetTitle(String),
}
