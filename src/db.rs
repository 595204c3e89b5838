//! Connection pool lifecycle: one connection attempt at startup, shared for the life of the process.
//!
//! The handle resolves exactly once. A failed attempt is never retried; every later
//! `pool()` call sees the failure until the process restarts.

use sqlx::postgres::{PgConnectOptions, PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use tokio::sync::watch;

#[derive(Debug)]
enum Resolution {
    Pending,
    Connected(PgPool),
    Failed,
}

impl Resolution {
    fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Pending)
    }
}

/// Cloneable asynchronous handle to the shared pool.
#[derive(Clone, Debug)]
pub struct PoolHandle {
    state: watch::Receiver<Resolution>,
}

impl PoolHandle {
    /// Start the single connection attempt on the current runtime and return immediately.
    ///
    /// The attempt is one direct connection with no backoff. On success that startup
    /// connection is closed and the handle resolves to a pool over the same options.
    pub fn connect(options: PgConnectOptions) -> Self {
        let (tx, handle) = Self::pending();
        tokio::spawn(async move {
            let resolution = match PgConnection::connect_with(&options).await {
                Ok(conn) => {
                    if let Err(e) = conn.close().await {
                        tracing::warn!(error = %e, "closing startup connection failed");
                    }
                    tracing::info!("connected to database");
                    Resolution::Connected(PgPoolOptions::new().connect_lazy_with(options))
                }
                Err(e) => {
                    tracing::error!(error = %e, "database connection failed");
                    Resolution::Failed
                }
            };
            let _ = tx.send(resolution);
        });
        handle
    }

    /// Already-resolved handle around an existing pool.
    pub fn ready(pool: PgPool) -> Self {
        let (_tx, state) = watch::channel(Resolution::Connected(pool));
        PoolHandle { state }
    }

    /// Already-resolved handle whose connection attempt failed.
    pub fn failed() -> Self {
        let (_tx, state) = watch::channel(Resolution::Failed);
        PoolHandle { state }
    }

    fn pending() -> (watch::Sender<Resolution>, Self) {
        let (tx, state) = watch::channel(Resolution::Pending);
        (tx, PoolHandle { state })
    }

    /// Wait for the connection attempt to finish. `None` means it failed.
    pub async fn pool(&self) -> Option<PgPool> {
        let mut state = self.state.clone();
        let resolved = state.wait_for(Resolution::is_resolved).await.ok()?;
        match &*resolved {
            Resolution::Connected(pool) => Some(pool.clone()),
            Resolution::Pending | Resolution::Failed => None,
        }
    }

    /// True once the attempt has finished, whatever the outcome.
    pub fn is_resolved(&self) -> bool {
        self.state.borrow().is_resolved()
    }
}
