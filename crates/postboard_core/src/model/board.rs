//! Board state value type.
//!
//! # Responsibility
//! - Hold the live note and connector collections as one explicit value.
//!
//! # Invariants
//! - Handlers never mutate a `BoardState` in place; every event application
//!   produces a new value so past/future log entries stay valid snapshots
//!   of handler inputs.

use super::{Connector, Note};

/// The live collections the event log operates on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub notes: Vec<Note>,
    pub connectors: Vec<Connector>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a live note by id.
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Looks up a live connector by id.
    pub fn connector(&self, id: &str) -> Option<&Connector> {
        self.connectors.iter().find(|connector| connector.id == id)
    }

    /// Returns the connectors incident to the given note id.
    pub fn incident_connectors(&self, note_id: &str) -> Vec<Connector> {
        self.connectors
            .iter()
            .filter(|connector| connector.touches(note_id))
            .cloned()
            .collect()
    }
}
