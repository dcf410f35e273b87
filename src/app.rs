use std::sync::Arc;

use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::services::{PgStockStore, StockStore};
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    /// CRUD 与用户相关接口直接走连接池
    pub db_pool: DbPool,
    /// 历史对齐与查询层只依赖这个只读接口
    pub stock_store: Arc<dyn StockStore>,
}

pub fn build_app(db_pool: DbPool) -> Router {
    let stock_store: Arc<dyn StockStore> = Arc::new(PgStockStore::new(db_pool.clone()));
    build_app_with_state(AppState { db_pool, stock_store })
}

pub fn build_app_with_state(state: AppState) -> Router {
    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// 内存存储 + 不会真正建连的连接池
#[cfg(test)]
pub fn test_app(store: crate::services::memory_store::MemoryStore) -> Router {
    let manager = ConnectionManager::<PgConnection>::new("postgres://localhost:1/unused");
    let db_pool = Pool::builder()
        .min_idle(Some(0))
        .connection_timeout(std::time::Duration::from_millis(50))
        .build_unchecked(manager);
    build_app_with_state(AppState {
        db_pool,
        stock_store: Arc::new(store),
    })
}
