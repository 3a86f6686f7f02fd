//! Input routing: modal dialog first, then the open menu, then keybindings,
//! then plain typing.

use super::Workbench;
use crate::core::event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::Command;
use crate::kernel::menu::MenuKind;
use crate::kernel::{Action as KernelAction, DialogInput};
use crate::tui::view::EventResult;

const DIALOG_PAGE: isize = 10;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        _ => EventResult::Ignored,
    }
}

fn consumed(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

impl Workbench {
    pub(super) fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        if key_event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        if self.store.state().ui.is_modal() {
            return self.handle_dialog_key(key_event);
        }

        let key = Key::from(*key_event);
        if self.store.state().ui.menu.is_open() {
            if let Some(result) = self.handle_menu_key(&key) {
                return result;
            }
        }

        if let Some(command) = self.keybindings.resolve(&key) {
            tracing::trace!(%key, command = command.name(), "key resolved");
            let changed = self.dispatch_kernel(KernelAction::RunCommand(command));
            if self.should_quit() {
                return EventResult::Quit;
            }
            return consumed(changed);
        }

        if let Some(ch) = key.typed_char() {
            return consumed(self.dispatch_kernel(KernelAction::InsertText(ch.to_string())));
        }

        EventResult::Ignored
    }

    fn handle_dialog_key(&mut self, key_event: &KeyEvent) -> EventResult {
        let input = match key_event.code {
            KeyCode::Enter => DialogInput::Accept,
            KeyCode::Esc => DialogInput::Cancel,
            KeyCode::Backspace => DialogInput::Backspace,
            KeyCode::Up => DialogInput::MoveSelection(-1),
            KeyCode::Down => DialogInput::MoveSelection(1),
            KeyCode::PageUp => DialogInput::MoveSelection(-DIALOG_PAGE),
            KeyCode::PageDown => DialogInput::MoveSelection(DIALOG_PAGE),
            KeyCode::Tab | KeyCode::BackTab => DialogInput::CycleFilter,
            _ => match Key::from(*key_event).typed_char() {
                Some(ch) => DialogInput::Char(ch),
                // Modal: everything else is swallowed.
                None => return EventResult::Consumed,
            },
        };
        self.dispatch_kernel(KernelAction::Dialog(input));
        EventResult::Consumed
    }

    /// `None` lets the key fall through to the regular bindings.
    fn handle_menu_key(&mut self, key: &Key) -> Option<EventResult> {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => KernelAction::MenuClose,
            (KeyCode::Up, KeyModifiers::NONE) => KernelAction::MenuMove(-1),
            (KeyCode::Down, KeyModifiers::NONE) => KernelAction::MenuMove(1),
            (KeyCode::Left, KeyModifiers::NONE) => KernelAction::MenuSwitch(-1),
            (KeyCode::Right, KeyModifiers::NONE) => KernelAction::MenuSwitch(1),
            (KeyCode::Enter, _) => KernelAction::MenuActivate,
            (KeyCode::Char(ch), KeyModifiers::NONE) => {
                match MenuKind::ALL
                    .into_iter()
                    .find(|kind| kind.mnemonic().eq_ignore_ascii_case(&ch))
                {
                    Some(kind) => KernelAction::MenuOpen(kind),
                    None => KernelAction::MenuClose,
                }
            }
            _ => return None,
        };
        let changed = self.dispatch_kernel(action);
        if self.should_quit() {
            return Some(EventResult::Quit);
        }
        Some(consumed(changed))
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        if self.store.state().ui.menu.is_open() {
            self.dispatch_kernel(KernelAction::MenuClose);
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        consumed(self.dispatch_kernel(KernelAction::InsertText(text)))
    }

    /// Runs a command as if its shortcut had been pressed.
    pub fn run_command(&mut self, command: Command) -> bool {
        self.dispatch_kernel(KernelAction::RunCommand(command))
    }
}
