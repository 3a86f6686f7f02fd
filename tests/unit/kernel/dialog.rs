use super::*;

fn entry(dir: &Path, name: &str, is_dir: bool) -> DirEntryInfo {
    DirEntryInfo::new(dir.join(name), is_dir)
}

fn dialog_with_entries() -> FileDialogState {
    let dir = PathBuf::from("/work");
    let mut dialog = FileDialogState::new(FileDialogKind::Open, dir.clone());
    dialog.set_entries(vec![
        entry(&dir, "docs", true),
        entry(&dir, "notes.txt", false),
        entry(&dir, "script.py", false),
        entry(&dir, "README.md", false),
    ]);
    dialog
}

fn names(dialog: &FileDialogState) -> Vec<String> {
    dialog.visible_entries().into_iter().map(|e| e.name).collect()
}

#[test]
fn filter_keeps_directories_and_matching_files() {
    let mut dialog = dialog_with_entries();
    assert_eq!(dialog.filter().label, "Text Document (*.txt)");
    assert_eq!(names(&dialog), vec!["..", "docs", "notes.txt"]);

    dialog.cycle_filter();
    assert_eq!(names(&dialog), vec!["..", "docs", "script.py"]);

    dialog.cycle_filter();
    assert_eq!(names(&dialog), vec!["..", "docs", "README.md"]);

    dialog.cycle_filter();
    dialog.cycle_filter();
    assert_eq!(dialog.filter().extension, "txt");
}

#[test]
fn root_has_no_parent_entry() {
    let dialog = FileDialogState::new(FileDialogKind::Open, PathBuf::from("/"));
    assert!(names(&dialog).is_empty());
}

#[test]
fn moving_selection_fills_input_and_clamps() {
    let mut dialog = dialog_with_entries();
    assert!(dialog.move_selection(2));
    assert_eq!(dialog.input, "notes.txt");

    dialog.move_selection(10);
    assert_eq!(dialog.selected, 2);

    dialog.move_selection(-10);
    assert_eq!(dialog.selected, 0);
    assert_eq!(dialog.input, "..");
}

#[test]
fn resolve_chooses_typed_file_relative_to_dir() {
    let mut dialog = dialog_with_entries();
    dialog.input = "new.txt".to_string();
    assert_eq!(
        dialog.resolve(),
        FileDialogOutcome::Chosen(PathBuf::from("/work/new.txt"))
    );

    dialog.input = "/tmp/abs.txt".to_string();
    assert_eq!(
        dialog.resolve(),
        FileDialogOutcome::Chosen(PathBuf::from("/tmp/abs.txt"))
    );
}

#[test]
fn resolve_descends_into_directories() {
    let mut dialog = dialog_with_entries();
    dialog.move_selection(1);
    assert_eq!(dialog.input, "docs");
    assert_eq!(
        dialog.resolve(),
        FileDialogOutcome::Descend(PathBuf::from("/work/docs"))
    );

    dialog.input = "..".to_string();
    assert_eq!(dialog.resolve(), FileDialogOutcome::Descend(PathBuf::from("/")));

    dialog.input = "sub/".to_string();
    assert_eq!(
        dialog.resolve(),
        FileDialogOutcome::Descend(PathBuf::from("/work/sub"))
    );
}

#[test]
fn resolve_with_blank_input_does_nothing() {
    let mut dialog = dialog_with_entries();
    dialog.input = "   ".to_string();
    assert_eq!(dialog.resolve(), FileDialogOutcome::Nothing);
}

#[test]
fn blank_printer_means_default() {
    let mut print = PrintDialogState::default();
    assert_eq!(print.printer(), None);
    print.printer = " office ".to_string();
    assert_eq!(print.printer().as_deref(), Some("office"));
}
