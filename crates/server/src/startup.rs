use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};
use service::{outlet::SeaOrmOutletRepository, pizza::HttpPizzaCatalog};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool, migrate if configured, and wire services.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let repo = Arc::new(SeaOrmOutletRepository::new(db));
    let catalog = Arc::new(HttpPizzaCatalog::new(&cfg.pizza_service.base_url)?);
    info!(base_url = %catalog.base_url(), "pizza service configured");

    Ok(AppState::new(repo, catalog))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: load configuration and run the HTTP server until shutdown.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting outlet service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("outlet service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
