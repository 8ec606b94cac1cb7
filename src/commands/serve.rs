//! Serve command - Starts the HTTP server.

use crate::api::middleware::request_tracing;
use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Execute the serve command.
///
/// The database must be reachable before the listener binds.
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    tracing::info!("Starting server...");

    let db = Database::connect(&config).await?;
    db.ensure_schema().await?;

    let services = Services::from_database(&db, &config);
    let app_state = AppState::from_container(&services);

    let mut app = create_router(app_state);
    if config.is_development() {
        app = app.layer(request_tracing());
    }

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(
        "Server running in {} mode on http://{}",
        config.environment,
        addr
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
