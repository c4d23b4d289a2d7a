//! QuickNote server entry point.
//!
//! # Responsibility
//! - Parse CLI configuration and bootstrap logging.
//! - Assemble the note service and serve the REST API + static client.

use anyhow::Context;
use axum::serve;
use clap::Parser;
use log::info;
use quicknote_core::{default_log_level, init_logging, FileNoteRepository, NoteService};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

use quicknote_server::api::{ApiState, RouterBuilder};
use quicknote_server::config::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_dir = absolutize(&args.log_dir)?;
    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| default_log_level())
        .to_string();
    init_logging(&level, &log_dir.to_string_lossy())
        .map_err(|message| anyhow::anyhow!(message))?;

    let repo = FileNoteRepository::new(&args.data_file);
    let state = ApiState::new(NoteService::new(repo));
    let app = RouterBuilder::with_state(state, &args.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!(
        "event=server_start module=server status=ok port={} data_file={} public_dir={}",
        args.port,
        args.data_file.display(),
        args.public_dir.display()
    );
    println!("QuickNote listening on http://localhost:{}", args.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve(listener, app).await.context("server terminated")?;

    Ok(())
}

fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}
