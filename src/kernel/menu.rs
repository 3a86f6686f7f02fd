//! Action registry: the declarative table behind the menu bar, toolbar and default shortcuts.

use crate::core::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub icon: &'static str,
    pub label: &'static str,
    pub status_tip: &'static str,
    /// Default chord, in settings syntax.
    pub shortcut: &'static str,
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Action(ActionSpec),
    Separator,
}

impl MenuEntry {
    pub fn action(&self) -> Option<&ActionSpec> {
        match self {
            MenuEntry::Action(spec) => Some(spec),
            MenuEntry::Separator => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    File,
    Edit,
}

impl MenuKind {
    pub const ALL: [MenuKind; 2] = [MenuKind::File, MenuKind::Edit];

    pub fn title(self) -> &'static str {
        match self {
            MenuKind::File => "File",
            MenuKind::Edit => "Edit",
        }
    }

    /// Mnemonic letter (the `&F` of `&File`).
    pub fn mnemonic(self) -> char {
        match self {
            MenuKind::File => 'F',
            MenuKind::Edit => 'E',
        }
    }

    pub fn entries(self) -> &'static [MenuEntry] {
        match self {
            MenuKind::File => FILE_MENU,
            MenuKind::Edit => EDIT_MENU,
        }
    }

    pub fn neighbor(self, delta: isize) -> MenuKind {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0) as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }

    /// Index of the first selectable entry at or after `from`, moving by `step` and wrapping.
    pub fn next_selectable(self, from: usize, step: isize) -> usize {
        let entries = self.entries();
        let len = entries.len() as isize;
        let dir = if step < 0 { -1 } else { 1 };
        let mut idx = from as isize;
        for _ in 0..len {
            let i = idx.rem_euclid(len) as usize;
            if entries[i].action().is_some() {
                return i;
            }
            idx += dir;
        }
        0
    }
}

const fn action(
    icon: &'static str,
    label: &'static str,
    status_tip: &'static str,
    shortcut: &'static str,
    command: Command,
) -> MenuEntry {
    MenuEntry::Action(ActionSpec {
        icon,
        label,
        status_tip,
        shortcut,
        command,
    })
}

static FILE_MENU: &[MenuEntry] = &[
    action("◰", "Open", "Open File", "ctrl+o", Command::Open),
    action("▣", "Save", "Save File", "ctrl+s", Command::Save),
    action("▨", "Save As", "Save File As", "ctrl+shift+s", Command::SaveAs),
    action("⎙", "Print", "Print File", "ctrl+p", Command::Print),
];

static EDIT_MENU: &[MenuEntry] = &[
    action("↶", "Undo", "Undo", "ctrl+z", Command::Undo),
    action("↷", "Redo", "Redo", "ctrl+y", Command::Redo),
    action("⌫", "Clear", "Clear", "ctrl+l", Command::Clear),
    MenuEntry::Separator,
    action("✂", "Cut", "Cut", "ctrl+x", Command::Cut),
    action("⧉", "Copy", "Copy", "ctrl+c", Command::Copy),
    action("▤", "Paste", "Paste", "ctrl+v", Command::Paste),
    action("▦", "Select All", "Select All", "ctrl+a", Command::SelectAll),
    MenuEntry::Separator,
    action("↩", "Wrap Text", "Wrap Text", "ctrl+alt+x", Command::WrapText),
    action("◉", "Screenshot", "Screenshot", "ctrl+shift+p", Command::Screenshot),
];

/// Every registered action in menu order (the toolbar order too).
pub fn all_actions() -> impl Iterator<Item = &'static ActionSpec> {
    MenuKind::ALL
        .into_iter()
        .flat_map(|kind| kind.entries().iter())
        .filter_map(MenuEntry::action)
}

pub fn find(command: Command) -> Option<&'static ActionSpec> {
    all_actions().find(|spec| spec.command == command)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/menu.rs"]
mod tests;
