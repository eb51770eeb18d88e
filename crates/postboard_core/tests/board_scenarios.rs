use postboard_core::{
    Action, BoardService, Connector, Document, Domain, EventData, NoteColor, NoteUpdate, Side,
};

fn kinds(board: &BoardService) -> Vec<(Domain, Action)> {
    board
        .event_log()
        .past()
        .iter()
        .map(|event| (event.target, event.action))
        .collect()
}

#[test]
fn scenario_b_type_change_flushes_buffered_move() {
    let mut board = BoardService::new();

    let n1 = board.create_note(10.0, 20.0);
    board.update_note(&n1.id, NoteUpdate::move_to(50.0, 60.0));
    let n2 = board.create_note(300.0, 60.0);
    board.create_connector(Connector::new(
        n1.id.clone(),
        Side::Right,
        n2.id.clone(),
        Side::Left,
    ));

    assert_eq!(
        kinds(&board),
        vec![
            (Domain::Note, Action::Create),
            (Domain::Note, Action::Move),
            (Domain::Note, Action::Create),
        ]
    );
    assert!(board.event_log().future().is_empty());

    // The flushed move carries the committed endpoint.
    let EventData::Move { new_x, new_y, .. } = &board.event_log().past()[1].data else {
        panic!("second entry should be the flushed move");
    };
    assert_eq!((*new_x, *new_y), (50.0, 60.0));
}

#[test]
fn scenario_c_note_delete_captures_both_incident_connectors() {
    let mut board = BoardService::new();

    let n1 = board.create_note(0.0, 0.0);
    let n2 = board.create_note(400.0, 0.0);
    assert!(board.create_connector(Connector::new(
        n1.id.clone(),
        Side::Right,
        n2.id.clone(),
        Side::Left,
    )));
    assert!(board.create_connector(Connector::new(
        n2.id.clone(),
        Side::Left,
        n1.id.clone(),
        Side::Right,
    )));

    assert!(board.delete_selected(&n1.id, Domain::Note));
    assert!(board.snapshot().note(&n1.id).is_none());
    assert!(board.snapshot().connectors.is_empty());

    board.undo_last();

    let state = board.snapshot();
    assert!(state.note(&n1.id).is_some());
    assert_eq!(state.connectors.len(), 2);
    for connector in &state.connectors {
        assert!(state.note(&connector.start_id).is_some());
        assert!(state.note(&connector.end_id).is_some());
    }
}

#[test]
fn round_trip_law_holds_for_granularity_one_events() {
    let mut board = BoardService::new();

    let n1 = board.create_note(0.0, 0.0);
    let n2 = board.create_note(300.0, 100.0);
    board.create_connector(Connector::new(
        n1.id.clone(),
        Side::Bottom,
        n2.id.clone(),
        Side::Top,
    ));
    board.delete_selected(&n2.id, Domain::Note);

    let committed = board.snapshot().clone();
    let steps = 3;
    for _ in 0..steps {
        board.undo_last();
    }
    for _ in 0..steps {
        board.redo_last();
    }
    assert_eq!(board.snapshot(), &committed);
}

#[test]
fn value_swap_laws_for_move_edit_and_recolor() {
    let mut board = BoardService::new();
    let note = board.create_note(10.0, 10.0);

    board.update_note(&note.id, NoteUpdate::text("draft"));
    let after_edit = board.snapshot().clone();
    board.undo_last();
    assert_eq!(board.snapshot().note(&note.id).unwrap().text, "");
    board.redo_last();
    assert_eq!(board.snapshot(), &after_edit);

    board.update_note(&note.id, NoteUpdate::color(NoteColor::Purple));
    let after_recolor = board.snapshot().clone();
    board.undo_last();
    assert_eq!(
        board.snapshot().note(&note.id).unwrap().color,
        NoteColor::Yellow
    );
    board.redo_last();
    assert_eq!(board.snapshot(), &after_recolor);
}

#[test]
fn update_note_classifies_into_exactly_one_action() {
    let mut board = BoardService::new();
    let note = board.create_note(0.0, 0.0);

    board.update_note(&note.id, NoteUpdate::move_to(5.0, 6.0));
    board.update_note(&note.id, NoteUpdate::text("hello"));
    board.update_note(&note.id, NoteUpdate::color(NoteColor::Cyan));

    let log = board.event_log();
    let mut all: Vec<(Domain, Action)> = log
        .past()
        .iter()
        .map(|event| (event.target, event.action))
        .collect();
    all.extend(
        log.current_sequence()
            .iter()
            .map(|event| (event.target, event.action)),
    );

    assert_eq!(
        all,
        vec![
            (Domain::Note, Action::Create),
            (Domain::Note, Action::Move),
            (Domain::Note, Action::Edit),
            (Domain::Note, Action::ChangeColor),
        ]
    );
}

#[test]
fn edit_mode_toggle_is_not_logged() {
    let mut board = BoardService::new();
    let note = board.create_note(0.0, 0.0);
    let history_before = board.history_len();

    assert!(board.update_note(&note.id, NoteUpdate::editing(false)));
    assert!(!board.snapshot().note(&note.id).unwrap().is_editing);
    assert_eq!(board.history_len(), history_before);
}

#[test]
fn operations_on_unknown_ids_are_defensive_no_ops() {
    let mut board = BoardService::new();
    board.create_note(0.0, 0.0);
    let before = board.snapshot().clone();

    assert!(!board.update_note("missing", NoteUpdate::move_to(1.0, 1.0)));
    assert!(!board.delete_selected("missing", Domain::Note));
    assert!(!board.delete_selected("missing", Domain::Connector));
    assert!(!board.create_connector(Connector::new(
        "ghost-a",
        Side::Top,
        "ghost-b",
        Side::Bottom
    )));
    assert_eq!(board.snapshot(), &before);
}

#[test]
fn connector_delete_round_trips() {
    let mut board = BoardService::new();
    let n1 = board.create_note(0.0, 0.0);
    let n2 = board.create_note(250.0, 0.0);
    let connector = Connector::new(n1.id.clone(), Side::Right, n2.id.clone(), Side::Left);
    board.create_connector(connector.clone());

    board.delete_selected(&connector.id, Domain::Connector);
    assert!(board.snapshot().connectors.is_empty());

    board.undo_last();
    assert_eq!(board.snapshot().connectors, vec![connector]);
}

#[test]
fn import_replaces_state_and_resets_history() {
    let mut board = BoardService::new();
    board.create_note(0.0, 0.0);
    board.create_note(10.0, 10.0);
    assert!(board.can_undo());

    let mut other = BoardService::new();
    let imported_note = other.create_note(99.0, 99.0);
    let document = other.export_document();

    board.import(document);
    assert_eq!(board.snapshot().notes.len(), 1);
    assert_eq!(board.snapshot().notes[0].id, imported_note.id);
    assert!(!board.can_undo());
    assert!(!board.can_redo());
    assert_eq!(board.history_len(), 0);
}

#[test]
fn connector_draw_gesture_only_commits_on_finish() {
    let mut board = BoardService::new();
    let n1 = board.create_note(0.0, 0.0);
    let n2 = board.create_note(300.0, 0.0);
    let history_before = board.history_len();

    board.begin_connector_draw(n1.id.clone(), Side::Right);
    assert!(board.connector_origin().is_some());

    // Escape / empty-canvas click: transient state is discarded, no event.
    board.clear_selection();
    assert!(board.connector_origin().is_none());
    assert_eq!(board.history_len(), history_before);

    board.begin_connector_draw(n1.id.clone(), Side::Right);
    let connector = board
        .finish_connector_draw(&n2.id, Side::Left)
        .expect("draw onto a live note should commit");
    assert_eq!(board.snapshot().connectors, vec![connector]);
    assert!(board.history_len() > history_before);
}

#[test]
fn self_connector_draw_is_rejected() {
    let mut board = BoardService::new();
    let n1 = board.create_note(0.0, 0.0);

    board.begin_connector_draw(n1.id.clone(), Side::Right);
    assert!(board.finish_connector_draw(&n1.id, Side::Left).is_none());
    assert!(board.snapshot().connectors.is_empty());
}

#[test]
fn create_note_returns_the_note_for_immediate_wiring() {
    let mut board = BoardService::new();
    let note = board.create_note(12.0, 34.0);

    assert_eq!(board.snapshot().note(&note.id), Some(&note));
    assert!(note.is_editing);
    assert_eq!((note.x, note.y), (12.0, 34.0));
}

#[test]
fn export_document_matches_live_state() {
    let mut board = BoardService::new();
    let n1 = board.create_note(1.0, 2.0);
    let n2 = board.create_note(3.0, 4.0);
    board.create_connector(Connector::new(n1.id, Side::Top, n2.id, Side::Bottom));

    let document = board.export_document();
    assert_eq!(document, Document::from_state(board.snapshot()));
    assert_eq!(document.postits.len(), 2);
    assert_eq!(document.arrows.len(), 1);
}
