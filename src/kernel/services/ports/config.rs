use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub word_wrap: bool,
    pub default_viewport_height: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            word_wrap: false,
            default_viewport_height: 20,
        }
    }
}

impl EditorConfig {
    pub fn tab_width(&self) -> usize {
        usize::from(self.tab_size.max(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Spooler program; the text is piped to its stdin.
    pub command: String,
    /// Flag that precedes a printer name, e.g. `-d` for `lp`, `-P` for `lpr`.
    pub printer_flag: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            command: "lp".to_string(),
            printer_flag: "-d".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
