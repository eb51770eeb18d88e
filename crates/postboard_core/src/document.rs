//! Export/import document codec.
//!
//! # Responsibility
//! - Serialize a board snapshot to the `{ "postits": [...], "arrows": [...] }`
//!   document shape and back.
//!
//! # Invariants
//! - Field names are fixed for compatibility with existing exports:
//!   `postits`/`arrows`, camelCase entity fields, lowercase side names,
//!   hex color values.

use serde::{Deserialize, Serialize};

use crate::model::{BoardState, Connector, Note};

/// On-disk document shape for a full board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub postits: Vec<Note>,
    #[serde(default)]
    pub arrows: Vec<Connector>,
}

impl Document {
    /// Builds a document from a board snapshot.
    pub fn from_state(state: &BoardState) -> Self {
        Self {
            postits: state.notes.clone(),
            arrows: state.connectors.clone(),
        }
    }

    /// Consumes the document into a live board state.
    pub fn into_state(self) -> BoardState {
        BoardState {
            notes: self.postits,
            connectors: self.arrows,
        }
    }

    /// Serializes to pretty-printed JSON, matching exported files.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<&BoardState> for Document {
    fn from(state: &BoardState) -> Self {
        Self::from_state(state)
    }
}
