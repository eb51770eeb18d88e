//! Connector domain record.
//!
//! # Responsibility
//! - Define the connector shape linking two notes by id and named side.
//!
//! # Invariants
//! - Connectors never store absolute coordinates; geometry is resolved at
//!   render time from the endpoint notes, so resizing a note never
//!   invalidates history.

use serde::{Deserialize, Serialize};

use super::{generate_id, EntityId};

/// Named edge of a note where a connector attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Canonical connector record between two notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    /// Stable id used for selection and event payloads.
    pub id: EntityId,
    /// Id of the note the connector starts from.
    pub start_id: EntityId,
    /// Id of the note the connector ends at.
    pub end_id: EntityId,
    /// Attachment side on the start note.
    pub start_side: Side,
    /// Attachment side on the end note.
    pub end_side: Side,
}

impl Connector {
    /// Creates a new connector between two notes.
    pub fn new(
        start_id: impl Into<EntityId>,
        start_side: Side,
        end_id: impl Into<EntityId>,
        end_side: Side,
    ) -> Self {
        Self {
            id: generate_id(),
            start_id: start_id.into(),
            end_id: end_id.into(),
            start_side,
            end_side,
        }
    }

    /// Returns true when either endpoint references the given note id.
    pub fn touches(&self, note_id: &str) -> bool {
        self.start_id == note_id || self.end_id == note_id
    }
}
