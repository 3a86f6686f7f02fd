//! Service adapters: OS specific implementations.

pub mod clipboard;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod print;
pub mod settings;

pub use clipboard::{ClipboardError, ClipboardService};
pub use file::LocalFileProvider;
pub use keybinding::KeybindingService;
pub use paths::{ensure_log_dir, get_app_dir, get_log_dir};
pub use print::{PrintError, PrintService};
pub use settings::{get_settings_path, load_settings, load_settings_from, parse_keybinding};
