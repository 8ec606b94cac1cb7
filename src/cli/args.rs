//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::Parser;

/// Notes API - note storage and user authentication over HTTP
#[derive(Parser, Debug)]
#[command(name = "notes-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub serve: ServeArgs,
}

/// Listener overrides; unset flags fall back to `HOST`/`PORT`
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}
