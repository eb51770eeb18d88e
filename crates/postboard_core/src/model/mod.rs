//! Domain model for board entities.
//!
//! # Responsibility
//! - Define the canonical note/connector records shared by the event log,
//!   the board service and the document codec.
//! - Keep one explicit `BoardState` value so history entries can be applied
//!   against self-contained snapshots.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntityId`.
//! - Every live connector's endpoints resolve to live notes.

pub mod board;
pub mod connector;
pub mod note;

pub use board::BoardState;
pub use connector::{Connector, Side};
pub use note::{Note, NoteColor, NOTE_HEIGHT, NOTE_WIDTH};

use uuid::Uuid;

/// Stable identifier for notes and connectors.
///
/// Kept as a string so documents exported by earlier builds (short
/// base36-style ids) import unchanged.
pub type EntityId = String;

const ID_LEN: usize = 9;

/// Generates a short stable id for a new entity.
pub fn generate_id() -> EntityId {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}
