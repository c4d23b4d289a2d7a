//! REST routes and static site wiring.
//!
//! # Responsibility
//! - Expose list/create/delete over `/api/notes`.
//! - Serve the static client pages and assets.
//!
//! # Invariants
//! - DELETE is idempotent: a miss is still 204, never 404.
//! - Store failures map to 500 with an empty body; details go to the log.

use crate::api::ApiState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use log::error;
use quicknote_core::{NoteDraft, NoteId, RepoError};
use serde::Serialize;
use std::path::Path as FsPath;
use tower_http::services::{ServeDir, ServeFile};

pub struct RouterBuilder;

impl RouterBuilder {
    /// Builds the full application router: API plus static site.
    pub fn with_state(state: ApiState, public_dir: &FsPath) -> Router {
        Router::new()
            .route("/api/notes", get(list_notes).post(create_note))
            .route("/api/notes/:id", delete(delete_note))
            .route("/api/diagnostics", get(diagnostics))
            .route_service("/", ServeFile::new(public_dir.join("index.html")))
            .route_service("/notes", ServeFile::new(public_dir.join("notes.html")))
            .nest_service("/assets", ServeDir::new(public_dir.join("assets")))
            .with_state(state)
    }

    /// Builds the API-only router, used by tests that need no static files.
    pub fn api_only(state: ApiState) -> Router {
        Router::new()
            .route("/api/notes", get(list_notes).post(create_note))
            .route("/api/notes/:id", delete(delete_note))
            .route("/api/diagnostics", get(diagnostics))
            .with_state(state)
    }
}

async fn list_notes(State(state): State<ApiState>) -> Response {
    match state.service.list_notes() {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(err) => store_failure("GET /api/notes", &err),
    }
}

async fn create_note(State(state): State<ApiState>, Json(draft): Json<NoteDraft>) -> Response {
    match state.service.create_note(&draft) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(err) => store_failure("POST /api/notes", &err),
    }
}

async fn delete_note(State(state): State<ApiState>, Path(id): Path<NoteId>) -> Response {
    // Removed-or-not, the outcome for the client is the same.
    match state.service.delete_note(id) {
        Ok(_removed) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_failure("DELETE /api/notes/:id", &err),
    }
}

#[derive(Serialize)]
struct Diagnostics {
    status: &'static str,
    version: &'static str,
    notes: usize,
}

async fn diagnostics(State(state): State<ApiState>) -> Response {
    match state.service.count_notes() {
        Ok(notes) => (
            StatusCode::OK,
            Json(Diagnostics {
                status: "ok",
                version: quicknote_core::core_version(),
                notes,
            }),
        )
            .into_response(),
        Err(err) => store_failure("GET /api/diagnostics", &err),
    }
}

fn store_failure(route: &str, err: &RepoError) -> Response {
    error!("event=api_request module=api status=error route=\"{route}\" error={err}");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
