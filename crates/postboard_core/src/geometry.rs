//! Connection-point geometry for rendering decorations.
//!
//! # Responsibility
//! - Resolve a note edge to the board-space point where a connector
//!   attaches.
//!
//! # Invariants
//! - Resolved points are never stored in event payloads or connectors;
//!   geometry may be recomputed freely without invalidating history.

use crate::model::{Note, Side, NOTE_HEIGHT, NOTE_WIDTH};

/// Returns the midpoint of the named note edge in board space.
pub fn connection_point(note: &Note, side: Side) -> (f64, f64) {
    match side {
        Side::Top => (note.x + NOTE_WIDTH / 2.0, note.y),
        Side::Right => (note.x + NOTE_WIDTH, note.y + NOTE_HEIGHT / 2.0),
        Side::Bottom => (note.x + NOTE_WIDTH / 2.0, note.y + NOTE_HEIGHT),
        Side::Left => (note.x, note.y + NOTE_HEIGHT / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::connection_point;
    use crate::model::{Note, Side};

    #[test]
    fn points_sit_on_edge_midpoints() {
        let mut note = Note::new(100.0, 50.0);
        note.id = "n1".to_string();

        assert_eq!(connection_point(&note, Side::Top), (200.0, 50.0));
        assert_eq!(connection_point(&note, Side::Right), (300.0, 125.0));
        assert_eq!(connection_point(&note, Side::Bottom), (200.0, 200.0));
        assert_eq!(connection_point(&note, Side::Left), (100.0, 125.0));
    }
}
