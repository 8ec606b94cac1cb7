//! Notes API - Application entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_api::{cli::Cli, commands, config::Config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match Config::from_env() {
        Ok(config) => {
            tracing::debug!(?config, "Configuration loaded");
            commands::serve::execute(cli.serve, config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
