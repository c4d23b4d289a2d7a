//! Server CLI configuration.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the QuickNote server binary.
#[derive(Parser, Debug)]
#[command(name = "quicknote_server", about = "Flat-file note-taking web app")]
pub struct CliArgs {
    /// TCP port to listen on.
    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Path of the JSON note document.
    #[arg(long, default_value = "db/db.json")]
    pub data_file: PathBuf,

    /// Directory holding the static client (HTML/CSS/JS).
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// Directory for rolling log files.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log level override (trace|debug|info|warn|error).
    #[arg(long)]
    pub log_level: Option<String>,
}
