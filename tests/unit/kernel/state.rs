use super::*;
use crate::kernel::dialog::MessageDialogState;

#[test]
fn untitled_document_title() {
    let doc = DocumentState::default();
    assert_eq!(doc.display_name(), "Untitled");
    assert_eq!(doc.title(), "Untitled - Notepad");
}

#[test]
fn title_uses_basename_only() {
    let doc = DocumentState {
        path: Some(PathBuf::from("/tmp/deep/dir/notes.md")),
    };
    assert_eq!(doc.title(), "notes.md - Notepad");
}

#[test]
fn highlighted_skips_separators() {
    let mut menu = MenuState {
        open: Some(MenuKind::Edit),
        selected: 3,
    };
    assert_eq!(menu.highlighted(), None);

    menu.selected = 2;
    assert_eq!(menu.highlighted().map(|spec| spec.label), Some("Clear"));

    menu.close();
    assert!(!menu.is_open());
    assert_eq!(menu.highlighted(), None);
}

#[test]
fn dialog_dir_prefers_document_parent() {
    let mut state = AppState::new(PathBuf::from("/work"), EditorConfig::default());
    assert_eq!(state.dialog_dir(), PathBuf::from("/work"));

    state.document.path = Some(PathBuf::from("/home/me/a.txt"));
    assert_eq!(state.dialog_dir(), PathBuf::from("/home/me"));

    // A bare relative name has an empty parent.
    state.document.path = Some(PathBuf::from("a.txt"));
    assert_eq!(state.dialog_dir(), PathBuf::from("/work"));
}

#[test]
fn modal_while_dialog_open() {
    let mut ui = UiState::default();
    assert!(!ui.is_modal());
    ui.dialog = Some(Dialog::Message(MessageDialogState::critical("boom")));
    assert!(ui.is_modal());
}
