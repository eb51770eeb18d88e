use postboard_core::{BoardState, Connector, Document, Note, NoteColor, Side};

fn sample_state() -> BoardState {
    let mut plan = Note::new(10.0, 20.0);
    plan.id = "n1".to_string();
    plan.text = "plan".to_string();
    plan.is_editing = false;
    plan.color = NoteColor::Blue;

    let mut detail = Note::new(320.0, 220.0);
    detail.id = "n2".to_string();
    detail.text = "detail".to_string();
    detail.is_editing = false;

    let mut link = Connector::new("n1", Side::Right, "n2", Side::Left);
    link.id = "c1".to_string();

    BoardState {
        notes: vec![plan, detail],
        connectors: vec![link],
    }
}

#[test]
fn document_round_trips_through_json() {
    let state = sample_state();
    let json = Document::from_state(&state).to_json().unwrap();
    let restored = Document::from_json(&json).unwrap().into_state();
    assert_eq!(restored, state);
}

#[test]
fn exported_json_keeps_compatibility_shape() {
    let json = Document::from_state(&sample_state()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let postits = value["postits"].as_array().unwrap();
    assert_eq!(postits.len(), 2);
    assert_eq!(postits[0]["id"], "n1");
    assert_eq!(postits[0]["isEditing"], false);
    assert_eq!(postits[0]["color"], "#87cefa");

    let arrows = value["arrows"].as_array().unwrap();
    assert_eq!(arrows[0]["startId"], "n1");
    assert_eq!(arrows[0]["endId"], "n2");
    assert_eq!(arrows[0]["startSide"], "right");
    assert_eq!(arrows[0]["endSide"], "left");
}

#[test]
fn import_accepts_documents_from_older_exports() {
    // Short base36-style ids, no color field, no arrows key.
    let json = r#"{
        "postits": [
            { "id": "x7f3k2a9b", "x": 5.0, "y": 6.0, "text": "legacy", "isEditing": false }
        ]
    }"#;

    let state = Document::from_json(json).unwrap().into_state();
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].id, "x7f3k2a9b");
    assert_eq!(state.notes[0].color, NoteColor::Yellow);
    assert!(state.connectors.is_empty());
}

#[test]
fn unknown_color_values_fall_back_to_yellow() {
    let json = r##"{
        "postits": [
            { "id": "n1", "x": 0.0, "y": 0.0, "text": "", "isEditing": false, "color": "#bada55" }
        ],
        "arrows": []
    }"##;

    let state = Document::from_json(json).unwrap().into_state();
    assert_eq!(state.notes[0].color, NoteColor::Yellow);
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(Document::from_json("{").is_err());
    assert!(Document::from_json(r#"{ "arrows": [] }"#).is_err());
}
