//! Forward/inverse handlers for the note domain.
//!
//! # Responsibility
//! - Apply note events to a state snapshot, returning a new snapshot.
//!
//! # Invariants
//! - Handlers are pure and total over their declared action.
//! - Note DELETE removes/restores the captured incident connectors in the
//!   same step, preserving referential integrity across a delete/undo
//!   round trip.
//! - A payload that does not match the action is a defensive no-op.

use log::warn;

use super::{Action, Event, EventData, Handler};
use crate::model::BoardState;

/// Looks up the forward handler for a note action.
pub fn redo_handler(action: Action) -> Option<Handler> {
    match action {
        Action::Create => Some(redo_create),
        Action::Delete => Some(redo_delete),
        Action::Move => Some(redo_move),
        Action::Edit => Some(redo_edit),
        Action::ChangeColor => Some(redo_recolor),
    }
}

/// Looks up the inverse handler for a note action.
pub fn undo_handler(action: Action) -> Option<Handler> {
    match action {
        Action::Create => Some(undo_create),
        Action::Delete => Some(undo_delete),
        Action::Move => Some(undo_move),
        Action::Edit => Some(undo_edit),
        Action::ChangeColor => Some(undo_recolor),
    }
}

fn redo_create(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Note(note) = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.notes.push(note.clone());
    next
}

fn undo_create(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Note(note) = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.notes.retain(|n| n.id != note.id);
    next
}

fn redo_delete(event: &Event, state: &BoardState) -> BoardState {
    let EventData::NoteDelete { note, connectors } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.notes.retain(|n| n.id != note.id);
    next.connectors
        .retain(|c| !connectors.iter().any(|captured| captured.id == c.id));
    next
}

fn undo_delete(event: &Event, state: &BoardState) -> BoardState {
    let EventData::NoteDelete { note, connectors } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.notes.push(note.clone());
    next.connectors.extend(connectors.iter().cloned());
    next
}

fn redo_move(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Move { id, new_x, new_y, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    set_position(state, id, *new_x, *new_y)
}

fn undo_move(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Move { id, old_x, old_y, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    set_position(state, id, *old_x, *old_y)
}

fn redo_edit(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Edit { id, new_text, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    if let Some(note) = next.notes.iter_mut().find(|n| n.id == *id) {
        note.text = new_text.clone();
    }
    next
}

fn undo_edit(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Edit { id, old_text, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    if let Some(note) = next.notes.iter_mut().find(|n| n.id == *id) {
        note.text = old_text.clone();
    }
    next
}

fn redo_recolor(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Recolor { id, new_color, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    if let Some(note) = next.notes.iter_mut().find(|n| n.id == *id) {
        note.color = *new_color;
    }
    next
}

fn undo_recolor(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Recolor { id, old_color, .. } = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    if let Some(note) = next.notes.iter_mut().find(|n| n.id == *id) {
        note.color = *old_color;
    }
    next
}

fn set_position(state: &BoardState, id: &str, x: f64, y: f64) -> BoardState {
    let mut next = state.clone();
    if let Some(note) = next.notes.iter_mut().find(|n| n.id == id) {
        note.x = x;
        note.y = y;
    }
    next
}

fn payload_mismatch(event: &Event, state: &BoardState) -> BoardState {
    warn!(
        "event=payload_mismatch module=event kind={} status=skipped",
        event.kind()
    );
    state.clone()
}
