//! Forward/inverse handlers for the connector domain.
//!
//! # Responsibility
//! - Apply connector CREATE/DELETE events to a state snapshot.
//!
//! # Invariants
//! - Connectors support only CREATE and DELETE; other actions have no
//!   handler and fall through to the caller's diagnostic path.

use log::warn;

use super::{Action, Event, EventData, Handler};
use crate::model::BoardState;

/// Looks up the forward handler for a connector action.
pub fn redo_handler(action: Action) -> Option<Handler> {
    match action {
        Action::Create => Some(redo_create),
        Action::Delete => Some(redo_delete),
        Action::Move | Action::Edit | Action::ChangeColor => None,
    }
}

/// Looks up the inverse handler for a connector action.
pub fn undo_handler(action: Action) -> Option<Handler> {
    match action {
        Action::Create => Some(undo_create),
        Action::Delete => Some(undo_delete),
        Action::Move | Action::Edit | Action::ChangeColor => None,
    }
}

fn redo_create(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Connector(connector) = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.connectors.push(connector.clone());
    next
}

fn undo_create(event: &Event, state: &BoardState) -> BoardState {
    let EventData::Connector(connector) = &event.data else {
        return payload_mismatch(event, state);
    };
    let mut next = state.clone();
    next.connectors.retain(|c| c.id != connector.id);
    next
}

fn redo_delete(event: &Event, state: &BoardState) -> BoardState {
    undo_create(event, state)
}

fn undo_delete(event: &Event, state: &BoardState) -> BoardState {
    redo_create(event, state)
}

fn payload_mismatch(event: &Event, state: &BoardState) -> BoardState {
    warn!(
        "event=payload_mismatch module=event kind={} status=skipped",
        event.kind()
    );
    state.clone()
}
