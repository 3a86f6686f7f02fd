use std::path::PathBuf;

use crate::core::Command;

use super::action::DialogInput;
use super::dialog::{
    ConfirmOverwriteState, Dialog, FileDialogKind, FileDialogOutcome, FileDialogState,
    MessageDialogState, PrintDialogState,
};
use super::menu::MenuKind;
use super::{Action, AppState, Effect};

/// 一次 dispatch 的结果：需要执行的副作用，以及状态是否改变
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn with_effects(state_changed: bool, effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 唯一的状态入口：Action 进，Effect 出，自身不做 IO
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => {
                if self.state.ui.is_modal() {
                    return DispatchResult::changed(false);
                }
                let had_status = self.state.ui.status.take().is_some();
                let menu_was_open = self.state.ui.menu.is_open();
                if !matches!(
                    cmd,
                    Command::FileMenu | Command::EditMenu | Command::MenuBar
                ) {
                    self.state.ui.menu.close();
                }
                let mut result = self.dispatch_command(cmd);
                result.state_changed |=
                    had_status || menu_was_open != self.state.ui.menu.is_open();
                result
            }
            Action::InsertText(text) => {
                if self.state.ui.is_modal() {
                    let mut changed = false;
                    for ch in text.chars().filter(|ch| !ch.is_control()) {
                        changed |= self.reduce_dialog(DialogInput::Char(ch)).state_changed;
                    }
                    return DispatchResult::changed(changed);
                }
                self.state.ui.menu.close();
                DispatchResult::changed(self.state.editor.insert_text(&text))
            }
            Action::EditorResize { width, height } => {
                DispatchResult::changed(self.state.editor.set_viewport_size(width, height))
            }
            Action::OpenPath(path) => {
                DispatchResult::with_effects(false, vec![Effect::LoadFile(path)])
            }
            Action::Dialog(input) => self.reduce_dialog(input),
            Action::DirLoaded { dir, entries } => match self.state.ui.dialog.as_mut() {
                Some(Dialog::File(dialog)) if dialog.dir == dir => {
                    dialog.set_entries(entries);
                    DispatchResult::changed(true)
                }
                _ => DispatchResult::changed(false),
            },
            Action::DirLoadError { dir, message } => match self.state.ui.dialog.as_mut() {
                Some(Dialog::File(dialog)) if dialog.dir == dir => {
                    dialog.set_entries(Vec::new());
                    dialog.error = Some(message);
                    DispatchResult::changed(true)
                }
                _ => DispatchResult::changed(false),
            },
            Action::FileLoaded { path, content } => {
                tracing::info!(path = %path.display(), bytes = content.len(), "opened file");
                self.state.editor.set_text(&content);
                self.state.document.path = Some(path);
                self.state.ui.status = Some(format!("Opened {}", self.state.document.display_name()));
                DispatchResult::with_effects(true, vec![Effect::SetTitle(self.state.title())])
            }
            Action::FileLoadFailed { message } | Action::FileSaveFailed { message } => {
                self.state.ui.menu.close();
                self.state.ui.dialog = Some(Dialog::Message(MessageDialogState::critical(message)));
                DispatchResult::changed(true)
            }
            Action::FileSaved { path, adopt_path } => {
                tracing::info!(path = %path.display(), adopt_path, "saved file");
                let mut effects = Vec::new();
                if adopt_path {
                    self.state.document.path = Some(path);
                    effects.push(Effect::SetTitle(self.state.title()));
                }
                self.state.ui.status = Some(format!("Saved {}", self.state.document.display_name()));
                DispatchResult::with_effects(true, effects)
            }
            Action::SaveTargetChecked { path, exists } => self.save_target_checked(path, exists),
            Action::MenuOpen(kind) => {
                if self.state.ui.is_modal() {
                    return DispatchResult::changed(false);
                }
                let prev = self.state.ui.menu;
                self.state.ui.menu.open = Some(kind);
                self.state.ui.menu.selected = kind.next_selectable(0, 1);
                DispatchResult::changed(prev != self.state.ui.menu)
            }
            Action::MenuMove(delta) => {
                let Some(kind) = self.state.ui.menu.open else {
                    return DispatchResult::changed(false);
                };
                let len = kind.entries().len() as isize;
                let from = (self.state.ui.menu.selected as isize + delta).rem_euclid(len) as usize;
                let next = kind.next_selectable(from, delta);
                let changed = next != self.state.ui.menu.selected;
                self.state.ui.menu.selected = next;
                DispatchResult::changed(changed)
            }
            Action::MenuSwitch(delta) => {
                let Some(kind) = self.state.ui.menu.open else {
                    return DispatchResult::changed(false);
                };
                let next = kind.neighbor(delta);
                self.state.ui.menu.open = Some(next);
                self.state.ui.menu.selected = next.next_selectable(0, 1);
                DispatchResult::changed(next != kind)
            }
            Action::MenuActivate => {
                let Some(spec) = self.state.ui.menu.highlighted() else {
                    return DispatchResult::changed(false);
                };
                self.state.ui.menu.close();
                let mut result = self.dispatch_command(spec.command);
                result.state_changed = true;
                result
            }
            Action::MenuClose => {
                let was_open = self.state.ui.menu.is_open();
                self.state.ui.menu.close();
                DispatchResult::changed(was_open)
            }
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
            Command::Open => self.show_file_dialog(FileDialogKind::Open),
            Command::Save => match self.state.document.path.clone() {
                Some(path) => DispatchResult::with_effects(
                    false,
                    vec![Effect::WriteFile {
                        path,
                        text: self.state.editor.text(),
                        adopt_path: false,
                    }],
                ),
                None => self.show_file_dialog(FileDialogKind::SaveAs),
            },
            Command::SaveAs => self.show_file_dialog(FileDialogKind::SaveAs),
            Command::Print => {
                self.state.ui.dialog = Some(Dialog::Print(PrintDialogState::default()));
                DispatchResult::changed(true)
            }
            Command::Screenshot => DispatchResult::with_effects(false, vec![Effect::Screenshot]),
            Command::FileMenu => self.dispatch(Action::MenuOpen(MenuKind::File)),
            Command::EditMenu => self.dispatch(Action::MenuOpen(MenuKind::Edit)),
            Command::MenuBar => {
                if self.state.ui.menu.is_open() {
                    self.dispatch(Action::MenuClose)
                } else {
                    self.dispatch(Action::MenuOpen(MenuKind::File))
                }
            }
            other => {
                let (state_changed, effects) = self.state.editor.apply_command(other);
                DispatchResult::with_effects(state_changed, effects)
            }
        }
    }

    fn show_file_dialog(&mut self, kind: FileDialogKind) -> DispatchResult {
        let dir = self.state.dialog_dir();
        self.state.ui.dialog = Some(Dialog::File(FileDialogState::new(kind, dir.clone())));
        DispatchResult::with_effects(true, vec![Effect::ListDir(dir)])
    }

    fn reduce_dialog(&mut self, input: DialogInput) -> DispatchResult {
        let Some(dialog) = self.state.ui.dialog.as_mut() else {
            return DispatchResult::changed(false);
        };

        match dialog {
            Dialog::Message(_) => match input {
                DialogInput::Accept | DialogInput::Cancel => {
                    self.state.ui.dialog = None;
                    DispatchResult::changed(true)
                }
                _ => DispatchResult::changed(false),
            },
            Dialog::Print(print) => match input {
                DialogInput::Char(ch) => {
                    print.printer.push(ch);
                    DispatchResult::changed(true)
                }
                DialogInput::Backspace => DispatchResult::changed(print.printer.pop().is_some()),
                DialogInput::Accept => {
                    let printer = print.printer();
                    self.state.ui.dialog = None;
                    DispatchResult::with_effects(
                        true,
                        vec![Effect::Print {
                            printer,
                            text: self.state.editor.text(),
                        }],
                    )
                }
                DialogInput::Cancel => {
                    self.state.ui.dialog = None;
                    DispatchResult::changed(true)
                }
                DialogInput::MoveSelection(_) | DialogInput::CycleFilter => {
                    DispatchResult::changed(false)
                }
            },
            Dialog::ConfirmOverwrite(confirm) => match input {
                DialogInput::Accept => {
                    let path = confirm.path.clone();
                    self.state.ui.dialog = None;
                    DispatchResult::with_effects(true, vec![self.save_as_effect(path)])
                }
                DialogInput::Cancel => {
                    let file = confirm.file.clone();
                    self.state.ui.dialog = Some(Dialog::File(file));
                    DispatchResult::changed(true)
                }
                _ => DispatchResult::changed(false),
            },
            Dialog::File(file) => match input {
                DialogInput::Char(ch) => {
                    file.input.push(ch);
                    file.error = None;
                    DispatchResult::changed(true)
                }
                DialogInput::Backspace => DispatchResult::changed(file.input.pop().is_some()),
                DialogInput::MoveSelection(delta) => {
                    DispatchResult::changed(file.move_selection(delta))
                }
                DialogInput::CycleFilter => {
                    file.cycle_filter();
                    DispatchResult::changed(true)
                }
                DialogInput::Cancel => {
                    self.state.ui.dialog = None;
                    DispatchResult::changed(true)
                }
                DialogInput::Accept => match file.resolve() {
                    FileDialogOutcome::Nothing => DispatchResult::changed(false),
                    FileDialogOutcome::Descend(dir) => {
                        file.enter_dir(dir.clone());
                        DispatchResult::with_effects(true, vec![Effect::ListDir(dir)])
                    }
                    // The dialog stays up until the target has been checked.
                    FileDialogOutcome::Chosen(path) if file.kind == FileDialogKind::SaveAs => {
                        DispatchResult::with_effects(false, vec![Effect::CheckSaveTarget(path)])
                    }
                    FileDialogOutcome::Chosen(path) => {
                        self.state.ui.dialog = None;
                        DispatchResult::with_effects(true, vec![Effect::LoadFile(path)])
                    }
                },
            },
        }
    }

    /// 另存为：目标不存在时直接写入，已存在时先弹出覆盖确认。
    fn save_target_checked(&mut self, path: PathBuf, exists: bool) -> DispatchResult {
        let Some(Dialog::File(file)) = self.state.ui.dialog.as_ref() else {
            return DispatchResult::changed(false);
        };
        if file.kind != FileDialogKind::SaveAs {
            return DispatchResult::changed(false);
        }

        if exists {
            let file = file.clone();
            self.state.ui.dialog = Some(Dialog::ConfirmOverwrite(ConfirmOverwriteState {
                path,
                file,
            }));
            return DispatchResult::changed(true);
        }
        self.state.ui.dialog = None;
        DispatchResult::with_effects(true, vec![self.save_as_effect(path)])
    }

    fn save_as_effect(&self, path: PathBuf) -> Effect {
        Effect::WriteFile {
            path,
            text: self.state.editor.text(),
            adopt_path: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
