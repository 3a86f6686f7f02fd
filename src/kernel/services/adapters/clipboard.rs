//! Clipboard service.
//!
//! Uses the system clipboard when one is reachable. Otherwise text is kept in an
//! in-process register and copies are mirrored to the terminal through OSC 52.

use crate::tui::osc52;
use arboard::Clipboard;

const PASTE_MAX_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug)]
pub enum ClipboardError {
    GetFailed(String),
    SetFailed(String),
    TooLarge(usize),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::GetFailed(e) => write!(f, "failed to read clipboard: {}", e),
            ClipboardError::SetFailed(e) => write!(f, "failed to write clipboard: {}", e),
            ClipboardError::TooLarge(size) => {
                write!(f, "clipboard text too large ({} MB, limit 10 MB)", size / 1024 / 1024)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

pub struct ClipboardService {
    system: Option<Clipboard>,
    register: String,
    mirror_to_terminal: bool,
}

impl ClipboardService {
    pub fn new() -> Self {
        let system = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::info!(error = %err, "system clipboard unavailable, using local register");
                None
            }
        };
        Self {
            system,
            register: String::new(),
            mirror_to_terminal: true,
        }
    }

    /// Register-only clipboard that never touches the OS or the terminal.
    pub fn in_memory() -> Self {
        Self {
            system: None,
            register: String::new(),
            mirror_to_terminal: false,
        }
    }

    pub fn is_system(&self) -> bool {
        self.system.is_some()
    }

    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        let text = match self.system.as_mut() {
            Some(clipboard) => clipboard
                .get_text()
                .map_err(|e| ClipboardError::GetFailed(e.to_string()))?,
            None => self.register.clone(),
        };

        if text.len() > PASTE_MAX_SIZE {
            return Err(ClipboardError::TooLarge(text.len()));
        }
        Ok(text)
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.register = text.to_string();

        match self.system.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::SetFailed(e.to_string())),
            None if self.mirror_to_terminal => {
                if let Err(err) = osc52::copy_to_terminal(text) {
                    tracing::debug!(error = %err, "osc52 copy skipped");
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
