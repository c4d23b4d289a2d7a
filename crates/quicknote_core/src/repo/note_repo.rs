//! Note repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the persisted note collection.
//! - Own identity assignment at creation time.
//!
//! # Invariants
//! - Every mutation is a full read-modify-write of the document.
//! - Delete is idempotent: a missing id is a no-op, never an error.
//! - List order is persisted (append) order.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::store::{load_notes, save_notes, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Returns the full collection in persisted order.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Assigns a fresh id to the draft, appends and persists it, and
    /// returns the canonical persisted note.
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<Note>;
    /// Removes the matching note if present and persists the collection.
    /// Returns whether a note was actually removed.
    fn delete_note(&self, id: NoteId) -> RepoResult<bool>;
}

/// Flat-file JSON-backed note repository.
///
/// Holds only the document path; every operation re-reads the file, so the
/// repository itself carries no cached state between calls.
pub struct FileNoteRepository {
    path: PathBuf,
}

impl FileNoteRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteRepository for FileNoteRepository {
    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(load_notes(&self.path)?)
    }

    fn create_note(&self, draft: &NoteDraft) -> RepoResult<Note> {
        let mut notes = load_notes(&self.path)?;
        let note = Note::from_draft(draft);
        notes.push(note.clone());
        save_notes(&self.path, &notes)?;
        Ok(note)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        let mut notes = load_notes(&self.path)?;
        let before = notes.len();
        notes.retain(|note| note.id != id);

        if notes.len() == before {
            return Ok(false);
        }

        save_notes(&self.path, &notes)?;
        Ok(true)
    }
}
