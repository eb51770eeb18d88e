//! Event log engine: bounded, coalescing undo/redo journal.
//!
//! # Responsibility
//! - Record committed events with per-type coalescing granularity.
//! - Drive undo/redo by applying inverse/forward handlers to a snapshot.
//!
//! # Invariants
//! - `past` never exceeds `MAX_LOG_SIZE`; the oldest entry is dropped first.
//! - Every newly recorded event clears `future`.
//! - Undo mid-gesture reverts the *first* buffered event while a type-change
//!   flush commits the *last* one. The two policies intentionally disagree;
//!   keep them as-is.
//! - Undo/redo discard an under-threshold coalescing buffer entirely.

use std::collections::VecDeque;

use log::debug;

use super::{apply_forward, apply_inverse, Action, Domain, Event, EventKind};
use crate::model::BoardState;

/// Maximum number of committed history entries.
pub const MAX_LOG_SIZE: usize = 100;

/// Coalescing granularity for one event type: a run of this many
/// consecutive same-type events collapses into one committed entry.
fn granularity(kind: EventKind) -> usize {
    match (kind.target, kind.action) {
        (Domain::Note, Action::Move) => 10,
        (Domain::Note, Action::Edit) => 3,
        _ => 1,
    }
}

/// Reversible, coalescing command journal.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    past: VecDeque<Event>,
    future: VecDeque<Event>,
    current_sequence: Vec<Event>,
    last_event_type: Option<EventKind>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed event, coalescing runs of the same type.
    ///
    /// A type change flushes the last element of the outgoing buffer into
    /// `past`; reaching the type's granularity flushes the last element of
    /// the current run. Recording always invalidates redo history.
    pub fn record(&mut self, event: Event) {
        let kind = event.kind();
        let granularity = granularity(kind);

        if self.last_event_type != Some(kind) {
            if let Some(last) = self.current_sequence.last().cloned() {
                self.push_past(last);
            }
            self.current_sequence = vec![event];
        } else {
            self.current_sequence.push(event);
            if self.current_sequence.len() >= granularity {
                if let Some(last) = self.current_sequence.last().cloned() {
                    self.push_past(last);
                }
                self.current_sequence.clear();
            }
        }

        self.future.clear();
        self.last_event_type = Some(kind);
        debug!(
            "event=event_recorded module=event_log kind={kind} past={} buffered={}",
            self.past.len(),
            self.current_sequence.len()
        );
    }

    /// Reverts the most recent step and returns the resulting state.
    ///
    /// A non-empty coalescing buffer is reverted via its first element and
    /// then discarded; otherwise the newest `past` entry is popped. No-op
    /// when there is nothing to undo.
    pub fn undo(&mut self, state: &BoardState) -> BoardState {
        let event = if let Some(first) = self.current_sequence.first() {
            first.clone()
        } else if let Some(last) = self.past.pop_back() {
            last
        } else {
            return state.clone();
        };

        let next = apply_inverse(&event, state);
        debug!("event=undo_applied module=event_log kind={}", event.kind());
        self.future.push_front(event);
        self.current_sequence.clear();
        self.last_event_type = None;
        next
    }

    /// Re-applies the most recently undone step and returns the result.
    ///
    /// No-op when there is nothing to redo.
    pub fn redo(&mut self, state: &BoardState) -> BoardState {
        let Some(event) = self.future.pop_front() else {
            return state.clone();
        };

        let next = apply_forward(&event, state);
        debug!("event=redo_applied module=event_log kind={}", event.kind());
        self.push_past(event);
        self.current_sequence.clear();
        self.last_event_type = None;
        next
    }

    /// True when an undo would revert something.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty() || !self.current_sequence.is_empty()
    }

    /// True when a redo would re-apply something.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Committed plus buffered entry count; the auto-save dirty flag.
    pub fn history_len(&self) -> usize {
        self.past.len() + self.current_sequence.len()
    }

    /// Committed history, oldest first.
    pub fn past(&self) -> &VecDeque<Event> {
        &self.past
    }

    /// Undone events awaiting redo, next first.
    pub fn future(&self) -> &VecDeque<Event> {
        &self.future
    }

    /// Buffered same-type events not yet committed to `past`.
    pub fn current_sequence(&self) -> &[Event] {
        &self.current_sequence
    }

    fn push_past(&mut self, event: Event) {
        if self.past.len() >= MAX_LOG_SIZE {
            self.past.pop_front();
        }
        self.past.push_back(event);
    }
}
