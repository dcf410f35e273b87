use axum::Router;

use crate::app::AppState;

mod root;
mod stock;
mod stock_daily_data;
mod stock_indicator;
mod stock_money_flow;
mod stock_money_flow_all;
mod user;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 根路径与健康检查
        .merge(root::router())
        // 业务 API 统一挂在 /api/v1 前缀下
        .nest(
            "/api/v1",
            Router::new()
                .nest("/stocks", stock::router())
                .nest("/stock-daily-data", stock_daily_data::router())
                .nest("/stock-indicators", stock_indicator::router())
                .nest("/stock-money-flow", stock_money_flow::router())
                .nest("/stock-money-flow-all", stock_money_flow_all::router())
                .nest("/user", user::router()),
        )
}
