use serde::{Deserialize, Serialize};

use super::config::{EditorConfig, PrintConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

/// `{ "key": "ctrl+shift+w", "command": "wrapText" }`. A command of `""` or `"-"` unbinds the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
