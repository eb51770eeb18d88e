//! Rotating auto-save driven by the event log dirty flag.
//!
//! # Responsibility
//! - Decide whether the board changed since the last save and, if so,
//!   write its document to the next rotating snapshot slot.
//!
//! # Invariants
//! - Auto-save only reads history length; it never mutates the log.
//! - Slots rotate modulo `AUTO_SAVE_SLOTS`, overwriting the oldest save.
//! - Timer scheduling lives outside the core; callers invoke
//!   `save_if_dirty` on whatever cadence they choose.

use log::{debug, info};

use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
use crate::service::board_service::BoardService;

/// Number of rotating auto-save slots kept per board name.
pub const AUTO_SAVE_SLOTS: u32 = 10;

/// Tracks rotation state between auto-save ticks.
#[derive(Debug, Clone)]
pub struct AutoSaver {
    name: String,
    slot_index: u32,
    last_saved_history_len: usize,
}

impl AutoSaver {
    /// Creates an auto-saver for the named board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot_index: 0,
            last_saved_history_len: 0,
        }
    }

    /// Saves the board's document to the next slot when history has grown
    /// since the previous save. Returns the slot written, or `None` when
    /// the board was clean.
    pub fn save_if_dirty<R: SnapshotRepository>(
        &mut self,
        repo: &R,
        board: &BoardService,
    ) -> RepoResult<Option<u32>> {
        let history_len = board.history_len();
        if history_len <= self.last_saved_history_len {
            debug!(
                "event=autosave_skipped module=autosave name={} history_len={history_len}",
                self.name
            );
            return Ok(None);
        }

        let slot = self.slot_index;
        repo.save_snapshot(&self.name, slot, &board.export_document())?;
        self.slot_index = (self.slot_index + 1) % AUTO_SAVE_SLOTS;
        self.last_saved_history_len = history_len;
        info!(
            "event=autosave_written module=autosave name={} slot={slot} history_len={history_len}",
            self.name
        );
        Ok(Some(slot))
    }

    /// Board name this saver writes under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot the next dirty save will write to.
    pub fn next_slot(&self) -> u32 {
        self.slot_index
    }
}
