//! Flat-file JSON storage for the note collection.
//!
//! # Responsibility
//! - Load and persist the whole note collection as one JSON document.
//! - Keep file-format details inside the core persistence boundary.
//!
//! # Invariants
//! - The on-disk layout is a single JSON array of note objects, no envelope.
//! - Every mutation rewrites the full document (read-modify-write).
//! - A missing document means an empty collection, never an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod document;

pub use document::{load_notes, save_notes};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for document load/persist operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "invalid note document: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
