//! Persistence contracts for note CRUD.
//!
//! # Responsibility
//! - Define the repository interface consumed by use-case services.
//! - Keep document-format details behind the repository boundary.

pub mod note_repo;
