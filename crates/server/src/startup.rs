use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Parse config.toml once per boot; `None` when the file is absent or
/// unreadable, in which case everything falls back to env vars.
fn load_config() -> Option<configs::AppConfig> {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            Some(cfg)
        }
        Err(e) => {
            info!(error = %e, "no usable config file, using environment defaults");
            None
        }
    }
}

fn bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

async fn connect_db(
    cfg: Option<&configs::AppConfig>,
) -> anyhow::Result<sea_orm::DatabaseConnection> {
    // Pool tuning applies only when the database section validates
    if let Some(cfg) = cfg {
        match cfg.database.validate() {
            Ok(()) => return models::db::connect_with_config(&cfg.database).await,
            Err(e) => warn!(error = %e, "invalid database config, using DATABASE_URL"),
        }
    }
    models::db::connect().await
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    let db = connect_db(cfg.as_ref()).await?;

    // Schema is managed in-process; Migrator::up is a no-op when current
    migration::Migrator::up(&db, None).await?;

    let state = AppState { db };
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = bind_addr(cfg.as_ref())?;
    info!(%addr, "starting mfc portal server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
