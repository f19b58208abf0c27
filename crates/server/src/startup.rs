use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::addressbooks::{InMemoryServiceProvider, SeaOrmServiceProvider, SharedProvider};
use service::pagination::ListLimits;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

fn list_limits(cfg: &AppConfig) -> ListLimits {
    ListLimits { default_size: cfg.listing.default_size, max_size: cfg.listing.max_size }
}

/// Wire up the configured backend. The database backend applies pending migrations first.
pub async fn build_provider(cfg: &AppConfig) -> anyhow::Result<SharedProvider> {
    let provider: SharedProvider = match cfg.storage.backend {
        StorageBackend::Memory => match &cfg.storage.snapshot_path {
            Some(path) => Arc::new(InMemoryServiceProvider::with_snapshot(path).await?),
            None => Arc::new(InMemoryServiceProvider::new()),
        },
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!(event = "migrations_applied", "database schema up to date");
            Arc::new(SeaOrmServiceProvider::new(db))
        }
    };
    info!(backend = ?cfg.storage.backend, snapshot = ?cfg.storage.snapshot_path, "storage backend ready");
    Ok(provider)
}

/// Router for an already constructed provider; used by `serve` and by the integration tests.
pub fn build_app(provider: SharedProvider, cfg: &AppConfig) -> Router {
    let state = AppState::new(provider, list_limits(cfg));
    routes::build_router(state, build_cors())
}

/// Bind, serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let provider = build_provider(&cfg).await?;
    let app = build_app(provider, &cfg);

    let addr = load_bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "addressbook server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(event = "drained", "server stopped accepting connections");
    Ok(())
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: load configuration and run the HTTP server until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    serve(cfg, ctrl_c()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() -> anyhow::Result<()> {
        let cfg = configs::parse("[server]\nhost = \"0.0.0.0\"\nport = 9090\n")?;
        assert_eq!(load_bind_addr(&cfg)?.port(), 9090);
        Ok(())
    }

    #[tokio::test]
    async fn memory_backend_is_the_default() -> anyhow::Result<()> {
        let cfg = AppConfig::default();
        let provider = build_provider(&cfg).await?;
        assert!(provider.list(&Default::default()).await?.is_empty());
        Ok(())
    }
}
