//! Service ports: traits + data contracts.

pub mod config;
pub mod file;
pub mod settings;

pub use config::{EditorConfig, PrintConfig};
pub use file::{DirEntryInfo, FileError, FileProvider, Result as FileResult};
pub use settings::{KeybindingRule, Settings};
