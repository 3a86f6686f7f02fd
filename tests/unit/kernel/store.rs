use super::*;
use crate::kernel::dialog::FILE_FILTERS;
use crate::kernel::services::ports::{DirEntryInfo, EditorConfig};
use std::path::PathBuf;

fn new_store() -> Store {
    Store::new(AppState::new(PathBuf::from("/work"), EditorConfig::default()))
}

fn type_into_dialog(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::Dialog(DialogInput::Char(ch)));
    }
}

fn open_document(store: &mut Store, path: &str, content: &str) {
    store.dispatch(Action::FileLoaded {
        path: PathBuf::from(path),
        content: content.to_string(),
    });
}

fn file_dialog(store: &Store) -> &FileDialogState {
    match store.state().ui.dialog.as_ref() {
        Some(Dialog::File(dialog)) => dialog,
        other => panic!("expected file dialog, got {other:?}"),
    }
}

#[test]
fn untitled_title_without_path() {
    let store = new_store();
    assert_eq!(store.state().title(), "Untitled - Notepad");
}

#[test]
fn open_command_shows_dialog_and_lists_cwd() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::Open));

    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work"))]);
    assert_eq!(file_dialog(&store).kind, FileDialogKind::Open);
    assert_eq!(file_dialog(&store).filter().label, FILE_FILTERS[0].label);
}

#[test]
fn accepting_open_dialog_requests_load() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Open));
    type_into_dialog(&mut store, "notes.txt");

    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::LoadFile(PathBuf::from("/work/notes.txt"))]
    );
    assert!(store.state().ui.dialog.is_none());
}

#[test]
fn opening_valid_file_sets_path_text_and_title() {
    let mut store = new_store();
    store.dispatch(Action::InsertText("old".to_string()));

    let result = store.dispatch(Action::FileLoaded {
        path: PathBuf::from("/work/notes.txt"),
        content: "hello\nworld".to_string(),
    });

    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("notes.txt - Notepad".to_string())]
    );
    assert_eq!(
        store.state().document.path.as_deref(),
        Some(std::path::Path::new("/work/notes.txt"))
    );
    assert_eq!(store.state().editor.text(), "hello\nworld");
    assert_eq!(store.state().editor.buffer().cursor(), (0, 0));
    assert!(!store.state().editor.can_undo());
}

#[test]
fn failed_open_keeps_document_and_shows_error() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "keep me");

    store.dispatch(Action::FileLoadFailed {
        message: "No such file or directory: '/work/missing.txt'".to_string(),
    });

    assert_eq!(store.state().editor.text(), "keep me");
    assert_eq!(store.state().title(), "a.txt - Notepad");
    match store.state().ui.dialog.as_ref() {
        Some(Dialog::Message(msg)) => assert!(msg.message.contains("missing.txt")),
        other => panic!("expected message dialog, got {other:?}"),
    }

    store.dispatch(Action::Dialog(DialogInput::Accept));
    assert!(store.state().ui.dialog.is_none());
}

#[test]
fn save_without_path_behaves_like_save_as() {
    let mut save = new_store();
    let mut save_as = new_store();

    let a = save.dispatch(Action::RunCommand(Command::Save));
    let b = save_as.dispatch(Action::RunCommand(Command::SaveAs));

    assert_eq!(a.effects, b.effects);
    assert_eq!(file_dialog(&save).kind, FileDialogKind::SaveAs);
    assert_eq!(file_dialog(&save_as).kind, FileDialogKind::SaveAs);
}

#[test]
fn save_with_path_writes_in_place() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "body");

    let result = store.dispatch(Action::RunCommand(Command::Save));
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/work/a.txt"),
            text: "body".to_string(),
            adopt_path: false,
        }]
    );
    assert!(store.state().ui.dialog.is_none());
}

#[test]
fn cancelled_save_as_changes_nothing() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "body");
    store.dispatch(Action::RunCommand(Command::SaveAs));
    type_into_dialog(&mut store, "other.txt");

    let result = store.dispatch(Action::Dialog(DialogInput::Cancel));
    assert!(result.effects.is_empty());
    assert!(store.state().ui.dialog.is_none());
    assert_eq!(store.state().title(), "a.txt - Notepad");
    assert_eq!(store.state().editor.text(), "body");
}

#[test]
fn save_as_adopts_path_only_after_write() {
    let mut store = new_store();
    store.dispatch(Action::InsertText("draft".to_string()));
    store.dispatch(Action::RunCommand(Command::SaveAs));
    type_into_dialog(&mut store, "draft.txt");

    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::CheckSaveTarget(PathBuf::from("/work/draft.txt"))]
    );
    assert_eq!(file_dialog(&store).kind, FileDialogKind::SaveAs);

    let result = store.dispatch(Action::SaveTargetChecked {
        path: PathBuf::from("/work/draft.txt"),
        exists: false,
    });
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/work/draft.txt"),
            text: "draft".to_string(),
            adopt_path: true,
        }]
    );
    assert!(store.state().ui.dialog.is_none());
    assert_eq!(store.state().document.path, None);

    let result = store.dispatch(Action::FileSaved {
        path: PathBuf::from("/work/draft.txt"),
        adopt_path: true,
    });
    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("draft.txt - Notepad".to_string())]
    );
    assert_eq!(store.state().title(), "draft.txt - Notepad");
}

fn save_as_onto_existing(store: &mut Store) {
    open_document(store, "/work/a.txt", "new body");
    store.dispatch(Action::RunCommand(Command::SaveAs));
    type_into_dialog(store, "old.txt");
    store.dispatch(Action::Dialog(DialogInput::Accept));
    let result = store.dispatch(Action::SaveTargetChecked {
        path: PathBuf::from("/work/old.txt"),
        exists: true,
    });
    assert!(result.effects.is_empty());
}

#[test]
fn save_as_onto_existing_file_asks_first() {
    let mut store = new_store();
    save_as_onto_existing(&mut store);

    let confirm = match store.state().ui.dialog.as_ref() {
        Some(Dialog::ConfirmOverwrite(confirm)) => confirm,
        other => panic!("expected overwrite confirmation, got {other:?}"),
    };
    assert_eq!(confirm.path, PathBuf::from("/work/old.txt"));
    assert_eq!(
        confirm.message(),
        "old.txt already exists. Do you want to replace it?"
    );

    // Typing does not fall through to the editor or the file name.
    let typed = store.dispatch(Action::Dialog(DialogInput::Char('y')));
    assert!(typed.effects.is_empty());
    assert_eq!(store.state().editor.text(), "new body");
}

#[test]
fn declined_overwrite_returns_to_file_dialog() {
    let mut store = new_store();
    save_as_onto_existing(&mut store);

    let result = store.dispatch(Action::Dialog(DialogInput::Cancel));
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(file_dialog(&store).kind, FileDialogKind::SaveAs);
    assert_eq!(file_dialog(&store).input, "old.txt");
    assert_eq!(
        store.state().document.path,
        Some(PathBuf::from("/work/a.txt"))
    );
}

#[test]
fn accepted_overwrite_writes_file() {
    let mut store = new_store();
    save_as_onto_existing(&mut store);

    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/work/old.txt"),
            text: "new body".to_string(),
            adopt_path: true,
        }]
    );
    assert!(store.state().ui.dialog.is_none());
}

#[test]
fn stale_save_target_check_is_ignored() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Open));

    let result = store.dispatch(Action::SaveTargetChecked {
        path: PathBuf::from("/work/a.txt"),
        exists: true,
    });
    assert!(!result.state_changed);
    assert_eq!(file_dialog(&store).kind, FileDialogKind::Open);
}

#[test]
fn failed_save_as_keeps_path() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "body");

    store.dispatch(Action::FileSaveFailed {
        message: "Permission denied".to_string(),
    });
    assert_eq!(
        store.state().document.path,
        Some(PathBuf::from("/work/a.txt"))
    );
    assert!(matches!(store.state().ui.dialog, Some(Dialog::Message(_))));
}

#[test]
fn dialogs_start_in_document_directory() {
    let mut store = new_store();
    open_document(&mut store, "/home/me/notes/a.txt", "");

    let result = store.dispatch(Action::RunCommand(Command::Open));
    assert_eq!(
        result.effects,
        vec![Effect::ListDir(PathBuf::from("/home/me/notes"))]
    );
}

#[test]
fn dir_listing_only_applies_to_current_dialog_dir() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Open));

    let stale = store.dispatch(Action::DirLoaded {
        dir: PathBuf::from("/elsewhere"),
        entries: vec![DirEntryInfo::new(PathBuf::from("/elsewhere/x.txt"), false)],
    });
    assert!(!stale.state_changed);

    store.dispatch(Action::DirLoaded {
        dir: PathBuf::from("/work"),
        entries: vec![
            DirEntryInfo::new(PathBuf::from("/work/sub"), true),
            DirEntryInfo::new(PathBuf::from("/work/x.txt"), false),
        ],
    });
    assert_eq!(file_dialog(&store).visible_entries().len(), 3);
}

#[test]
fn accepting_a_directory_descends() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Open));
    store.dispatch(Action::DirLoaded {
        dir: PathBuf::from("/work"),
        entries: vec![DirEntryInfo::new(PathBuf::from("/work/sub"), true)],
    });
    store.dispatch(Action::Dialog(DialogInput::MoveSelection(1)));

    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work/sub"))]);
    assert_eq!(file_dialog(&store).dir, PathBuf::from("/work/sub"));
    assert!(file_dialog(&store).input.is_empty());
}

#[test]
fn dir_load_error_is_shown_in_dialog() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Open));
    store.dispatch(Action::DirLoadError {
        dir: PathBuf::from("/work"),
        message: "Permission denied".to_string(),
    });
    assert_eq!(file_dialog(&store).error.as_deref(), Some("Permission denied"));
}

#[test]
fn modal_dialog_blocks_commands_and_captures_text() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Print));

    let blocked = store.dispatch(Action::RunCommand(Command::Clear));
    assert!(!blocked.state_changed);

    store.dispatch(Action::InsertText("lab".to_string()));
    assert_eq!(store.state().editor.text(), "");
    match store.state().ui.dialog.as_ref() {
        Some(Dialog::Print(print)) => assert_eq!(print.printer, "lab"),
        other => panic!("expected print dialog, got {other:?}"),
    }
}

#[test]
fn print_dialog_emits_print_effect() {
    let mut store = new_store();
    store.dispatch(Action::InsertText("page".to_string()));

    store.dispatch(Action::RunCommand(Command::Print));
    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::Print {
            printer: None,
            text: "page".to_string(),
        }]
    );

    store.dispatch(Action::RunCommand(Command::Print));
    type_into_dialog(&mut store, "office");
    let result = store.dispatch(Action::Dialog(DialogInput::Accept));
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::Print { printer: Some(p), .. }] if p == "office"
    ));
}

#[test]
fn cancelled_print_does_nothing() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::Print));
    let result = store.dispatch(Action::Dialog(DialogInput::Cancel));
    assert!(result.effects.is_empty());
    assert!(store.state().ui.dialog.is_none());
}

#[test]
fn clear_empties_text_regardless_of_content() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "lots\nof\ntext");

    store.dispatch(Action::RunCommand(Command::Clear));
    assert_eq!(store.state().editor.text(), "");
    assert_eq!(store.state().title(), "a.txt - Notepad");
}

#[test]
fn wrap_toggle_twice_restores_mode() {
    let mut store = new_store();
    let initial = store.state().editor.wrap_enabled();

    store.dispatch(Action::RunCommand(Command::WrapText));
    assert_eq!(store.state().editor.wrap_enabled(), !initial);
    store.dispatch(Action::RunCommand(Command::WrapText));
    assert_eq!(store.state().editor.wrap_enabled(), initial);
}

#[test]
fn screenshot_and_quit() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::Screenshot));
    assert_eq!(result.effects, vec![Effect::Screenshot]);

    store.dispatch(Action::RunCommand(Command::Quit));
    assert!(store.state().ui.should_quit);
}

#[test]
fn menu_navigation_skips_separators() {
    let mut store = new_store();
    store.dispatch(Action::MenuOpen(MenuKind::Edit));
    assert_eq!(store.state().ui.menu.selected, 0);

    store.dispatch(Action::MenuMove(1));
    store.dispatch(Action::MenuMove(1));
    assert_eq!(store.state().ui.menu.selected, 2);
    store.dispatch(Action::MenuMove(1));
    assert_eq!(store.state().ui.menu.selected, 4);
    store.dispatch(Action::MenuMove(-1));
    assert_eq!(store.state().ui.menu.selected, 2);

    store.dispatch(Action::MenuMove(-1));
    store.dispatch(Action::MenuMove(-1));
    store.dispatch(Action::MenuMove(-1));
    assert_eq!(store.state().ui.menu.selected, 10);
    assert_eq!(
        store.state().ui.menu.highlighted().map(|s| s.label),
        Some("Screenshot")
    );
}

#[test]
fn menu_switch_wraps_between_menus() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::MenuBar));
    assert_eq!(store.state().ui.menu.open, Some(MenuKind::File));

    store.dispatch(Action::MenuSwitch(1));
    assert_eq!(store.state().ui.menu.open, Some(MenuKind::Edit));
    store.dispatch(Action::MenuSwitch(1));
    assert_eq!(store.state().ui.menu.open, Some(MenuKind::File));

    store.dispatch(Action::RunCommand(Command::MenuBar));
    assert!(!store.state().ui.menu.is_open());
}

#[test]
fn menu_activate_runs_highlighted_action() {
    let mut store = new_store();
    store.dispatch(Action::InsertText("text".to_string()));
    store.dispatch(Action::MenuOpen(MenuKind::Edit));
    store.dispatch(Action::MenuMove(1));
    store.dispatch(Action::MenuMove(1));

    let result = store.dispatch(Action::MenuActivate);
    assert!(result.state_changed);
    assert!(!store.state().ui.menu.is_open());
    assert_eq!(store.state().editor.text(), "");
}

#[test]
fn menu_activate_save_as_opens_dialog() {
    let mut store = new_store();
    store.dispatch(Action::MenuOpen(MenuKind::File));
    store.dispatch(Action::MenuMove(2));

    let result = store.dispatch(Action::MenuActivate);
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work"))]);
    assert_eq!(file_dialog(&store).kind, FileDialogKind::SaveAs);
}

#[test]
fn copy_then_paste_flow_through_effects() {
    let mut store = new_store();
    store.dispatch(Action::InsertText("abc".to_string()));
    store.dispatch(Action::RunCommand(Command::SelectAll));

    let cut = store.dispatch(Action::RunCommand(Command::Cut));
    assert_eq!(cut.effects, vec![Effect::SetClipboardText("abc".to_string())]);
    assert_eq!(store.state().editor.text(), "");

    let paste = store.dispatch(Action::RunCommand(Command::Paste));
    assert_eq!(paste.effects, vec![Effect::RequestClipboardText]);
    store.dispatch(Action::InsertText("abc".to_string()));
    assert_eq!(store.state().editor.text(), "abc");
}

#[test]
fn saved_status_clears_on_next_command() {
    let mut store = new_store();
    open_document(&mut store, "/work/a.txt", "");
    store.dispatch(Action::FileSaved {
        path: PathBuf::from("/work/a.txt"),
        adopt_path: false,
    });
    assert_eq!(store.state().ui.status.as_deref(), Some("Saved a.txt"));

    store.dispatch(Action::RunCommand(Command::CursorRight));
    assert_eq!(store.state().ui.status, None);
}
