//! Server: reads configuration, connects the pool, ensures tables and serves the API.

use servicios_api::{app, ensure_tables, AppState, Config, Database};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("servicios_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = Database::connect_lazy(&config.database);

    // A failed bootstrap is logged and the server still starts; requests then fail with 500.
    if let Err(e) = ensure_tables(&db).await {
        tracing::error!(error = %e, "error creating tables");
    }

    let state = AppState::new(db);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("API listening on http://localhost:{}", port);
    tracing::info!("OpenAPI document at http://localhost:{}{}", port, servicios_api::routes::DOCS_PATH);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
