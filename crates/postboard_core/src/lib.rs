//! Core domain logic for PostBoard.
//! This crate is the single source of truth for board history invariants.

pub mod db;
pub mod document;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use document::Document;
pub use event::log::{EventLog, MAX_LOG_SIZE};
pub use event::{apply_forward, apply_inverse, Action, Domain, Event, EventData, EventKind};
pub use geometry::connection_point;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    generate_id, BoardState, Connector, EntityId, Note, NoteColor, Side, NOTE_HEIGHT, NOTE_WIDTH,
};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotMeta, SnapshotRepository, SqliteSnapshotRepository,
};
pub use service::autosave::{AutoSaver, AUTO_SAVE_SLOTS};
pub use service::board_service::{BoardService, NoteUpdate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
