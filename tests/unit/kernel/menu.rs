use super::*;

#[test]
fn file_menu_lists_document_actions_in_order() {
    let labels: Vec<&str> = MenuKind::File
        .entries()
        .iter()
        .filter_map(MenuEntry::action)
        .map(|spec| spec.label)
        .collect();
    assert_eq!(labels, vec!["Open", "Save", "Save As", "Print"]);
}

#[test]
fn edit_menu_groups_are_separated() {
    let entries = MenuKind::Edit.entries();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[3], MenuEntry::Separator);
    assert_eq!(entries[8], MenuEntry::Separator);
    assert_eq!(entries[9].action().unwrap().command, Command::WrapText);
}

#[test]
fn every_action_has_a_shortcut_and_tip() {
    let specs: Vec<_> = all_actions().collect();
    assert_eq!(specs.len(), 13);
    for spec in specs {
        assert!(!spec.shortcut.is_empty(), "{} has no shortcut", spec.label);
        assert!(!spec.status_tip.is_empty());
        assert!(!spec.icon.is_empty());
    }
}

#[test]
fn find_locates_spec_by_command() {
    assert_eq!(find(Command::SaveAs).unwrap().status_tip, "Save File As");
    assert!(find(Command::CursorLeft).is_none());
}

#[test]
fn selection_skips_separators_and_wraps() {
    assert_eq!(MenuKind::Edit.next_selectable(3, 1), 4);
    assert_eq!(MenuKind::Edit.next_selectable(3, -1), 2);
    assert_eq!(MenuKind::Edit.next_selectable(11, 1), 0);
    assert_eq!(MenuKind::File.neighbor(1), MenuKind::Edit);
    assert_eq!(MenuKind::File.neighbor(-1), MenuKind::Edit);
    assert_eq!(MenuKind::Edit.neighbor(1), MenuKind::File);
}
