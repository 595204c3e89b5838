//! Server binary: reads configuration, starts the pool handle, serves the API.

use records_api::{app, AppState, DbConfig, PoolHandle, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("records_api=info,tower_http=info")),
        )
        .init();

    let server = ServerConfig::from_env()?;
    let state = match DbConfig::from_env().and_then(|db| db.connect_options().map(|opts| (db, opts))) {
        Ok((db, options)) => {
            tracing::info!(endpoint = %db.describe(), encrypt = db.encrypt, "connecting to database");
            AppState::new(PoolHandle::connect(options))
        }
        Err(e) => {
            tracing::error!(error = %e, "database configuration rejected; serving without a pool");
            AppState::without_pool()
        }
    };

    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
