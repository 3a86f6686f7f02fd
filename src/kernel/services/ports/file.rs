use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return FileError::NotFound(path.to_path_buf());
        }
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::NotFound(p) => write!(f, "No such file or directory: '{}'", p.display()),
            FileError::NotAFile(p) => write!(f, "Is a directory: '{}'", p.display()),
            FileError::Io { path, source } => write!(f, "{}: '{}'", source, path.display()),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A directory listing entry as shown in the file dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path, is_dir }
    }

    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }
}

pub trait FileProvider {
    fn scheme(&self) -> &'static str;

    /// Directories first, then case-insensitive by name.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>>;

    /// Reads the whole file as UTF-8.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Creates or truncates `path`. Missing parent directories are an error.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
