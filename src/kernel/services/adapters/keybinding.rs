//! Key chord -> command resolution.
//!
//! Defaults come from the action registry shortcuts plus the editing keys;
//! settings rules are layered on top.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::menu;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// First chord bound to `command`, preferring the registry default when it is still bound.
    pub fn key_for(&self, command: Command) -> Option<Key> {
        let default = menu::find(command)
            .and_then(|spec| parse_keybinding(spec.shortcut))
            .filter(|key| self.resolve(key) == Some(command));
        if default.is_some() {
            return default;
        }

        let mut keys: Vec<Key> = self
            .bindings
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| key.to_string());
        keys.into_iter().next()
    }

    /// Applies settings overrides; unknown keys or commands are skipped with a warning.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparsable key");
                continue;
            };

            let command = rule.command.trim();
            if command.is_empty() || command == "-" {
                self.unbind(&key);
                continue;
            }

            match parse_command(command) {
                Some(cmd) => self.bind(key, cmd),
                None => {
                    tracing::warn!(command = %rule.command, "ignoring keybinding for unknown command")
                }
            }
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();

    for spec in menu::all_actions() {
        if let Some(key) = parse_keybinding(spec.shortcut) {
            map.insert(key, spec.command);
        }
    }

    map.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    map.insert(Key::simple(KeyCode::F(10)), Command::MenuBar);
    map.insert(Key::alt(KeyCode::Char('f')), Command::FileMenu);
    map.insert(Key::alt(KeyCode::Char('e')), Command::EditMenu);
    map.insert(Key::ctrl_shift(KeyCode::Char('z')), Command::Redo);
    // Terminals without the kitty keyboard protocol send Ctrl+Shift+letter as Ctrl+letter.
    map.insert(Key::simple(KeyCode::F(12)), Command::SaveAs);
    map.insert(Key::simple(KeyCode::F(9)), Command::Screenshot);

    map.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    map.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    map.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    map.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    map.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    map.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    map.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    map.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    map.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    map.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    map.insert(Key::shift(KeyCode::Left), Command::SelectLeft);
    map.insert(Key::shift(KeyCode::Right), Command::SelectRight);
    map.insert(Key::shift(KeyCode::Up), Command::SelectUp);
    map.insert(Key::shift(KeyCode::Down), Command::SelectDown);
    map.insert(Key::shift(KeyCode::Home), Command::SelectLineStart);
    map.insert(Key::shift(KeyCode::End), Command::SelectLineEnd);

    map.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    map.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    map.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    map.insert(Key::shift(KeyCode::Backspace), Command::DeleteBackward);
    map.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    map.insert(
        Key::new(KeyCode::Delete, KeyModifiers::SHIFT),
        Command::Cut,
    );

    map
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
