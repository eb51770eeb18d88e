//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `postboard_core` end to end without any UI host.
//! - Keep the output shape stable for quick local sanity checks (entity
//!   ids are freshly generated on every run).

use postboard_core::{BoardService, Connector, Domain, NoteUpdate, Side};

fn main() {
    let mut board = BoardService::new();

    let plan = board.create_note(40.0, 40.0);
    let detail = board.create_note(320.0, 220.0);
    board.update_note(&plan.id, NoteUpdate::text("plan"));
    board.update_note(&detail.id, NoteUpdate::text("detail"));
    board.create_connector(Connector::new(
        plan.id.clone(),
        Side::Right,
        detail.id.clone(),
        Side::Left,
    ));

    board.delete_selected(&detail.id, Domain::Note);
    board.undo_last();

    println!("postboard_core version={}", postboard_core::core_version());
    println!(
        "notes={} connectors={} can_undo={} can_redo={}",
        board.snapshot().notes.len(),
        board.snapshot().connectors.len(),
        board.can_undo(),
        board.can_redo()
    );
    match board.export_document().to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize document: {err}"),
    }
}
