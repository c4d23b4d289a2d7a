//! Domain model for stored notes and unsaved drafts.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one wire-compatible note shape shared by store, API and client.
//!
//! # Invariants
//! - Every persisted note is identified by a stable `NoteId`.
//! - Deletion is a hard removal from the collection; no tombstones exist.

pub mod note;
