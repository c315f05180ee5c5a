use notepad_core::{Note, NoteMode};

#[test]
fn note_new_sets_defaults() {
    let note = Note::new(NoteMode::Text, "hello");

    assert_eq!(note.mode, NoteMode::Text);
    assert_eq!(note.content, "hello");
    assert_eq!(note.edit_value, "hello");
    assert!(!note.is_editing);
    assert!(!note.has_pending_edit());
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let mut note = Note::math("x -> y");
    note.is_editing = true;
    note.edit_value = "x <- y".to_string();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["mode"], "math");
    assert_eq!(json["content"], "x -> y");
    assert_eq!(json["isEditing"], true);
    assert_eq!(json["editValue"], "x <- y");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn deserialize_rejects_unknown_mode() {
    let value = serde_json::json!({ "mode": "code", "content": "fn main() {}" });
    assert!(serde_json::from_value::<Note>(value).is_err());
}

#[test]
fn mode_labels_parse_back() {
    for mode in [NoteMode::Text, NoteMode::Math] {
        assert_eq!(NoteMode::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(NoteMode::parse("Text"), None);
}
