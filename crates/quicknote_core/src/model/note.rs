//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical persisted note record and its unsaved draft form.
//! - Own identity assignment for newly created notes.
//!
//! # Invariants
//! - `id` is assigned exactly once, at creation, and never reused.
//! - Title/text are accepted as-is; the server applies no content validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned by the server to every persisted note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical persisted note record.
///
/// Serializes to the wire shape `{id, title, text}` used both in the JSON
/// document on disk and in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for selection and deletion.
    pub id: NoteId,
    /// Display title shown in the note list.
    pub title: String,
    /// Note body text.
    pub text: String,
}

/// An unsaved note body as submitted by the client.
///
/// A draft has no identity yet; it only becomes a `Note` when the store
/// accepts it and assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
}

impl Note {
    /// Creates a persisted note from a draft with a freshly generated id.
    ///
    /// # Invariants
    /// - The generated id is collision-resistant and stable across restarts.
    pub fn from_draft(draft: &NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), &draft.title, &draft.text)
    }

    /// Creates a note with a caller-provided stable id.
    ///
    /// Used by read paths where identity already exists in the document.
    pub fn with_id(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
        }
    }
}
