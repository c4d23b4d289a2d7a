//! Document load/persist paths for the note collection file.
//!
//! # Responsibility
//! - Read the full JSON array of notes from disk.
//! - Rewrite it durably on every mutation.
//!
//! # Invariants
//! - `load_notes` on a missing file returns an empty collection.
//! - `save_notes` replaces the document through a sibling temp file + rename,
//!   so readers never observe a truncated document.

use super::{StoreError, StoreResult};
use crate::model::note::Note;
use log::{error, info};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Loads the persisted note collection.
///
/// # Contract
/// - Missing file: empty collection (first run).
/// - Unreadable or malformed file: error, never silently masked.
///
/// # Side effects
/// - Emits `doc_load` logging events with duration and status.
pub fn load_notes(path: impl AsRef<Path>) -> StoreResult<Vec<Note>> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "event=doc_load module=store status=ok mode=missing_file notes=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=doc_load module=store status=error error_code=doc_read_failed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => {
            info!(
                "event=doc_load module=store status=ok notes={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(notes)
        }
        Err(err) => {
            error!(
                "event=doc_load module=store status=error error_code=doc_parse_failed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Persists the full note collection, replacing any previous document.
///
/// # Contract
/// - Creates the parent directory on first write.
/// - The write is replace-by-rename: a crash mid-write leaves the previous
///   document intact.
///
/// # Side effects
/// - Emits `doc_persist` logging events with duration and status.
pub fn save_notes(path: impl AsRef<Path>, notes: &[Note]) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match persist_document(path, notes) {
        Ok(()) => {
            info!(
                "event=doc_persist module=store status=ok notes={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=doc_persist module=store status=error error_code=doc_write_failed duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn persist_document(path: &Path, notes: &[Note]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let serialized = serde_json::to_string_pretty(notes)?;
    let staging = staging_path(path)?;

    fs::write(&staging, serialized)?;
    fs::rename(&staging, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> StoreResult<std::path::PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        StoreError::InvalidData(format!(
            "document path `{}` has no file name",
            path.display()
        ))
    })?;

    let mut staging_name = file_name.to_os_string();
    staging_name.push(".tmp");
    Ok(path.with_file_name(staging_name))
}
