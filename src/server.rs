//! HTTP server initialization and runtime setup.
//!
//! Handles link store construction, migrations and the Axum server lifecycle.

use crate::application::services::LinkSettings;
use crate::config::{Config, StoreKind};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{InMemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store (PostgreSQL pool with migrations applied, or
///   the in-memory store)
/// - Application services
/// - Axum HTTP server, stopped gracefully on Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let settings = LinkSettings {
        base_url: config.base_url.clone(),
        created_by: config.service_name.clone(),
        store_timeout: config.store_timeout(),
    };
    let state = AppState::new(store, settings, config.api_key.clone(), config.home_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the link store selected by `LINK_STORE`.
async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory link store, links are lost on restart");
            Ok(Arc::new(InMemoryLinkStore::new()))
        }
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("LINK_STORE=postgres requires DATABASE_URL")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgLinkStore::new(Arc::new(pool))))
        }
    }
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, draining connections");
}
