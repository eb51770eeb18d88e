use postboard_core::db::migrations::latest_version;
use postboard_core::db::{open_db, open_db_in_memory};
use postboard_core::{
    AutoSaver, BoardService, Document, NoteUpdate, RepoError, SnapshotRepository,
    SqliteSnapshotRepository, AUTO_SAVE_SLOTS,
};

fn sample_document(text: &str) -> Document {
    let mut board = BoardService::new();
    let note = board.create_note(1.0, 2.0);
    board.update_note(&note.id, NoteUpdate::text(text));
    board.export_document()
}

#[test]
fn migrations_apply_on_fresh_database() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() >= 1);
}

#[test]
fn open_db_works_on_a_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    repo.save_snapshot("default", 0, &sample_document("persisted"))
        .unwrap();
    drop(conn);

    // Reopen and read back.
    let conn = open_db(&path).unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    let loaded = repo.load_latest("default").unwrap();
    assert_eq!(loaded.postits[0].text, "persisted");
}

#[test]
fn save_and_load_slot_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    let document = sample_document("slot zero");

    repo.save_snapshot("default", 0, &document).unwrap();
    let loaded = repo.load_slot("default", 0).unwrap().unwrap();
    assert_eq!(loaded, document);

    assert!(repo.load_slot("default", 1).unwrap().is_none());
    assert!(repo.load_slot("other", 0).unwrap().is_none());
}

#[test]
fn saving_to_an_occupied_slot_overwrites_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_snapshot("default", 3, &sample_document("first"))
        .unwrap();
    repo.save_snapshot("default", 3, &sample_document("second"))
        .unwrap();

    let loaded = repo.load_slot("default", 3).unwrap().unwrap();
    assert_eq!(loaded.postits[0].text, "second");
    assert_eq!(repo.list_snapshots("default").unwrap().len(), 1);
}

#[test]
fn load_latest_returns_newest_save() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_snapshot("default", 0, &sample_document("older"))
        .unwrap();
    repo.save_snapshot("default", 1, &sample_document("newer"))
        .unwrap();

    let latest = repo.load_latest("default").unwrap();
    assert_eq!(latest.postits[0].text, "newer");
}

#[test]
fn load_latest_reports_missing_board_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    match repo.load_latest("nothing-here") {
        Err(RepoError::NotFound(name)) => assert_eq!(name, "nothing-here"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn corrupt_rows_surface_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (name, slot, document, saved_at) VALUES ('bad', 0, 'not json', 1);",
        [],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(matches!(
        repo.load_latest("bad"),
        Err(RepoError::InvalidData(_))
    ));
}

#[test]
fn autosave_skips_clean_boards_and_rotates_slots() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    let mut board = BoardService::new();
    let mut saver = AutoSaver::new("default");

    // Nothing happened yet: clean board, no save.
    assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), None);

    let note = board.create_note(0.0, 0.0);
    assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), Some(0));
    assert_eq!(saver.next_slot(), 1);

    // No new events since the save: skipped.
    assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), None);

    // A type change flushes the buffered create and buffers the edit, so
    // history grows and the board reads as dirty again.
    board.update_note(&note.id, NoteUpdate::text("updated"));
    assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), Some(1));
}

#[test]
fn autosave_slot_index_wraps_around() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    let mut board = BoardService::new();
    let mut saver = AutoSaver::new("default");

    // Alternating event types keep flushing the previous buffer, so every
    // iteration grows history and triggers a save.
    for i in 0..AUTO_SAVE_SLOTS {
        let note = board.create_note(f64::from(i), 0.0);
        board.update_note(&note.id, NoteUpdate::text(format!("note {i}")));
        assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), Some(i));
    }

    let note = board.create_note(99.0, 99.0);
    board.update_note(&note.id, NoteUpdate::text("wrap"));
    assert_eq!(saver.save_if_dirty(&repo, &board).unwrap(), Some(0));
    assert_eq!(
        repo.list_snapshots("default").unwrap().len(),
        AUTO_SAVE_SLOTS as usize
    );
}
