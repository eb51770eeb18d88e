//! Note domain record and palette colors.
//!
//! # Responsibility
//! - Define the canonical note shape used by handlers, service and codec.
//! - Map palette colors to the hex values stored in exported documents.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Colors serialize as hex strings so existing exports stay readable.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{generate_id, EntityId};

/// Note box width used by the connection-point resolver.
pub const NOTE_WIDTH: f64 = 200.0;
/// Note box height used by the connection-point resolver.
pub const NOTE_HEIGHT: f64 = 150.0;

/// Palette of supported note colors.
///
/// The wire form is the CSS hex value, so exported documents stay
/// compatible with older board files. Unknown hex values fall back to
/// yellow on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Orange,
    Blue,
    Cyan,
    Purple,
}

impl NoteColor {
    /// Returns the CSS hex value for this color.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Yellow => "#ffff88",
            Self::Pink => "#ffb6c1",
            Self::Orange => "#ffa500",
            Self::Blue => "#87cefa",
            Self::Cyan => "#00ffff",
            Self::Purple => "#dda0dd",
        }
    }

    /// Resolves a hex value back to a palette color, defaulting to yellow.
    pub fn from_hex(value: &str) -> Self {
        match value {
            "#ffb6c1" => Self::Pink,
            "#ffa500" => Self::Orange,
            "#87cefa" => Self::Blue,
            "#00ffff" => Self::Cyan,
            "#dda0dd" => Self::Purple,
            _ => Self::Yellow,
        }
    }
}

impl Serialize for NoteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for NoteColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = NoteColor;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS hex color string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NoteColor, E> {
                Ok(NoteColor::from_hex(value))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable id used for linking and event payloads.
    pub id: EntityId,
    /// Board-space x coordinate of the top-left corner.
    pub x: f64,
    /// Board-space y coordinate of the top-left corner.
    pub y: f64,
    /// Markdown-ish body text.
    #[serde(default)]
    pub text: String,
    /// Transient edit-mode flag. Never part of reversible history.
    #[serde(default)]
    pub is_editing: bool,
    /// Palette color, serialized as its hex value.
    #[serde(default)]
    pub color: NoteColor,
}

impl Note {
    /// Creates a new note at the given position.
    ///
    /// New notes start empty, in edit mode, with the default color — the
    /// same shape the board UI drops onto the canvas on double-click.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: generate_id(),
            x,
            y,
            text: String::new(),
            is_editing: true,
            color: NoteColor::default(),
        }
    }
}
