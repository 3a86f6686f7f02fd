use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.print.command, "lp");
    assert_eq!(settings.editor.tab_size, 4);
}

#[test]
fn partial_sections_fill_in_missing_fields() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "editor": { "word_wrap": true },
            "keybindings": [ { "key": "ctrl+k", "command": "clear" } ]
        }"#,
    )
    .unwrap();
    assert!(settings.editor.word_wrap);
    assert_eq!(settings.editor.tab_size, 4);
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+k".to_string(),
            command: "clear".to_string(),
        }]
    );
}
