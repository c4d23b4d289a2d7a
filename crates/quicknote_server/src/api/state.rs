//! Shared handler state.

use quicknote_core::{FileNoteRepository, NoteService};
use std::sync::Arc;

/// State handed to every API handler.
///
/// The note collection itself lives in the document file; the service is
/// stateless between calls, so plain `Arc` sharing is all the coordination
/// the handlers need.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<NoteService<FileNoteRepository>>,
}

impl ApiState {
    pub fn new(service: NoteService<FileNoteRepository>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
