//! HTTP server for QuickNote.
//!
//! The binary in `main.rs` wires CLI config and logging around the router
//! exposed here; integration tests drive the router directly.

pub mod api;
pub mod config;
