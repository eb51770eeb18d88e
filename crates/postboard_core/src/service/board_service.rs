//! Board controller: turns user intents into logged, applied events.
//!
//! # Responsibility
//! - Own the live board state, the event log, and ephemeral selection.
//! - Build events with full pre/post values, record them, and apply the
//!   forward handler so live state and history stay synchronized.
//!
//! # Invariants
//! - Selection and in-progress connector drawing are never logged;
//!   cancelling a gesture only clears transient fields.
//! - Every live connector's endpoints resolve to live notes.
//! - Importing a document replaces the collections wholesale and resets
//!   the log; imported state is not undoable back through prior history.

use log::{info, warn};

use crate::document::Document;
use crate::event::{apply_forward, Domain, Event};
use crate::event::log::EventLog;
use crate::model::{BoardState, Connector, EntityId, Note, NoteColor, Side};

/// Partial note update. Exactly one concern is applied per call, matching
/// the classification the board UI performs on pointer/keyboard commits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub text: Option<String>,
    pub color: Option<NoteColor>,
    pub is_editing: Option<bool>,
}

impl NoteUpdate {
    /// Position update, classified as MOVE.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Text update, classified as EDIT.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Color update, classified as CHANGE_COLOR.
    pub fn color(color: NoteColor) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Edit-mode toggle. Applied to live state without logging.
    pub fn editing(is_editing: bool) -> Self {
        Self {
            is_editing: Some(is_editing),
            ..Self::default()
        }
    }
}

/// Orchestrates end-user intents over the live board and its event log.
#[derive(Debug, Default)]
pub struct BoardService {
    state: BoardState,
    log: EventLog,
    selected_note: Option<EntityId>,
    selected_connector: Option<EntityId>,
    connector_origin: Option<(EntityId, Side)>,
}

impl BoardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note at the given position and returns it, so a caller
    /// can immediately wire a connector to the new id.
    pub fn create_note(&mut self, x: f64, y: f64) -> Note {
        let note = Note::new(x, y);
        info!("event=note_created module=board id={}", note.id);
        self.apply_and_record(Event::note_create(note.clone()));
        note
    }

    /// Applies a partial update to a note, classified into exactly one of
    /// MOVE / EDIT / CHANGE_COLOR. Returns false for an unknown id or an
    /// empty update.
    pub fn update_note(&mut self, id: &str, update: NoteUpdate) -> bool {
        let Some(note) = self.state.note(id).cloned() else {
            warn!("event=note_missing module=board id={id} status=skipped");
            return false;
        };

        if let (Some(x), Some(y)) = (update.x, update.y) {
            self.apply_and_record(Event::note_move(id, (note.x, note.y), (x, y)));
        } else if let Some(text) = update.text {
            self.apply_and_record(Event::note_edit(id, note.text, text));
        } else if let Some(color) = update.color {
            self.apply_and_record(Event::note_recolor(id, note.color, color));
        } else if let Some(is_editing) = update.is_editing {
            // Edit-mode is transient UI state: mutate live state directly,
            // outside reversible history.
            if let Some(live) = self.state.notes.iter_mut().find(|n| n.id == id) {
                live.is_editing = is_editing;
            }
        } else {
            warn!("event=empty_update module=board id={id} status=skipped");
            return false;
        }
        true
    }

    /// Creates a connector between two live notes. Rejects connectors with
    /// a dangling endpoint so referential integrity holds at the API edge.
    pub fn create_connector(&mut self, connector: Connector) -> bool {
        if self.state.note(&connector.start_id).is_none()
            || self.state.note(&connector.end_id).is_none()
        {
            warn!(
                "event=dangling_connector module=board id={} status=rejected",
                connector.id
            );
            return false;
        }
        info!("event=connector_created module=board id={}", connector.id);
        self.apply_and_record(Event::connector_create(connector));
        true
    }

    /// Deletes a note or connector by id.
    ///
    /// Deleting a note captures its incident connectors into the DELETE
    /// payload, so one undo restores the note and exactly those connectors.
    pub fn delete_selected(&mut self, id: &str, kind: Domain) -> bool {
        match kind {
            Domain::Note => {
                let Some(note) = self.state.note(id).cloned() else {
                    warn!("event=note_missing module=board id={id} status=skipped");
                    return false;
                };
                let incident = self.state.incident_connectors(id);
                info!(
                    "event=note_deleted module=board id={id} incident_connectors={}",
                    incident.len()
                );
                self.apply_and_record(Event::note_delete(note, incident));
                if self.selected_note.as_deref() == Some(id) {
                    self.selected_note = None;
                }
            }
            Domain::Connector => {
                let Some(connector) = self.state.connector(id).cloned() else {
                    warn!("event=connector_missing module=board id={id} status=skipped");
                    return false;
                };
                info!("event=connector_deleted module=board id={id}");
                self.apply_and_record(Event::connector_delete(connector));
                if self.selected_connector.as_deref() == Some(id) {
                    self.selected_connector = None;
                }
            }
        }
        true
    }

    /// Reverts the most recent step, replacing live state wholesale.
    pub fn undo_last(&mut self) {
        self.state = self.log.undo(&self.state);
    }

    /// Re-applies the most recently undone step.
    pub fn redo_last(&mut self) {
        self.state = self.log.redo(&self.state);
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// Committed plus buffered history length, used as an auto-save dirty
    /// flag by callers that never mutate the log.
    pub fn history_len(&self) -> usize {
        self.log.history_len()
    }

    /// Read-only snapshot of the live collections.
    pub fn snapshot(&self) -> &BoardState {
        &self.state
    }

    /// Direct log access for history displays.
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Current document shape for export/persistence.
    pub fn export_document(&self) -> Document {
        Document::from_state(&self.state)
    }

    /// Replaces the live collections wholesale and resets history.
    pub fn import(&mut self, document: Document) {
        self.state = document.into_state();
        self.log = EventLog::new();
        self.clear_selection();
        info!(
            "event=document_imported module=board notes={} connectors={}",
            self.state.notes.len(),
            self.state.connectors.len()
        );
    }

    // Selection and gesture state. Ephemeral by design: none of this is
    // logged or restored by undo/redo.

    pub fn select_note(&mut self, id: Option<EntityId>) {
        self.selected_note = id;
        self.selected_connector = None;
    }

    pub fn select_connector(&mut self, id: Option<EntityId>) {
        self.selected_connector = id;
        self.selected_note = None;
    }

    pub fn selected_note(&self) -> Option<&str> {
        self.selected_note.as_deref()
    }

    pub fn selected_connector(&self) -> Option<&str> {
        self.selected_connector.as_deref()
    }

    /// Starts a connector-drawing gesture from a note edge.
    pub fn begin_connector_draw(&mut self, note_id: EntityId, side: Side) {
        self.connector_origin = Some((note_id, side));
    }

    pub fn connector_origin(&self) -> Option<&(EntityId, Side)> {
        self.connector_origin.as_ref()
    }

    /// Completes an in-progress connector draw onto a target note.
    ///
    /// Returns the created connector, or `None` when no gesture is active,
    /// the target equals the origin, or an endpoint is not live. Only this
    /// commit produces an event; an abandoned gesture never does.
    pub fn finish_connector_draw(&mut self, end_id: &str, end_side: Side) -> Option<Connector> {
        let (start_id, start_side) = self.connector_origin.take()?;
        if start_id == end_id {
            return None;
        }
        let connector = Connector::new(start_id, start_side, end_id.to_string(), end_side);
        if self.create_connector(connector.clone()) {
            Some(connector)
        } else {
            None
        }
    }

    /// Cancels any in-progress gesture and selection (Escape / click on
    /// empty canvas). Never constructs an event.
    pub fn clear_selection(&mut self) {
        self.selected_note = None;
        self.selected_connector = None;
        self.connector_origin = None;
    }

    fn apply_and_record(&mut self, event: Event) {
        self.state = apply_forward(&event, &self.state);
        self.log.record(event);
    }
}
