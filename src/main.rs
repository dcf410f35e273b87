mod api_models;
mod app;
mod handler;
mod models;
mod repositories;
mod routes;
mod schema;
mod services;
mod utils;

use std::net::SocketAddr;

use anyhow::Context;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let server_cfg = utils::config::ServerConfig::from_env()?;
    let db_cfg = utils::config::DatabaseConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(db_cfg.url.as_str());
    let db_pool = Pool::builder()
        .max_size(db_cfg.pool_size)
        .build(manager)
        .context("Failed to create DB pool")?;
    tracing::info!("Database pool ready (max_size = {})", db_cfg.pool_size);

    let addr: SocketAddr = server_cfg.addr;
    let app = app::build_app(db_pool);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr} failed"))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
