//! Note use-case service.
//!
//! # Responsibility
//! - Provide stable list/create/delete entry points for API callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoResult};
use log::info;

/// Use-case service wrapper for note CRUD operations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all notes in persisted order.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Creates a note from a client-submitted draft.
    ///
    /// # Contract
    /// - Identity is assigned here, exactly once, by the repository.
    /// - Title/text are persisted as submitted, no validation applied.
    pub fn create_note(&self, draft: &NoteDraft) -> RepoResult<Note> {
        let note = self.repo.create_note(draft)?;
        info!(
            "event=note_create module=service status=ok id={} title_chars={} text_chars={}",
            note.id,
            note.title.chars().count(),
            note.text.chars().count()
        );
        Ok(note)
    }

    /// Deletes a note by id.
    ///
    /// # Contract
    /// - Idempotent: deleting an unknown id succeeds and reports `false`.
    pub fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        let removed = self.repo.delete_note(id)?;
        info!(
            "event=note_delete module=service status=ok id={} removed={}",
            id, removed
        );
        Ok(removed)
    }

    /// Returns the current note count, used by diagnostics.
    pub fn count_notes(&self) -> RepoResult<usize> {
        Ok(self.repo.list_notes()?.len())
    }
}
