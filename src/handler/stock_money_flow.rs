use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api_models::stock_daily_data::TradeDateQuery;
use crate::api_models::stock_money_flow::{CreateStockMoneyFlow, StockMoneyFlowResponse};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::required_date;
use crate::models::{NewStockMoneyFlow, StockMoneyFlow};
use crate::repositories::stock_money_flow;

impl From<StockMoneyFlow> for StockMoneyFlowResponse {
    fn from(row: StockMoneyFlow) -> Self {
        Self {
            id: row.id,
            symbol: row.symbol,
            trade_date: row.trade_date,
            main_net: row.main_net,
            retail_net: row.retail_net,
            large_order_ratio: row.large_order_ratio,
            medium_order_ratio: row.medium_order_ratio,
            small_order_ratio: row.small_order_ratio,
            created_at: row.created_at,
        }
    }
}

pub async fn create_money_flow(
    State(state): State<AppState>,
    Json(payload): Json<CreateStockMoneyFlow>,
) -> Result<(StatusCode, Json<StockMoneyFlowResponse>), AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_rec = NewStockMoneyFlow {
        symbol: payload.symbol,
        trade_date: payload.trade_date,
        main_net: payload.main_net,
        retail_net: payload.retail_net,
        large_order_ratio: payload.large_order_ratio,
        medium_order_ratio: payload.medium_order_ratio,
        small_order_ratio: payload.small_order_ratio,
    };
    let created = stock_money_flow::create(&mut conn, &new_rec).map_err(map_db_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// 按代码 + 交易日查询个股资金流，trade_date 必填
pub async fn get_money_flow_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<TradeDateQuery>,
) -> Result<Json<StockMoneyFlowResponse>, AppError> {
    let date = required_date(query.trade_date.as_deref(), "trade_date")?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_money_flow::find_by_symbol_and_date(&mut conn, &symbol, date).map_err(map_db_err)?;
    Ok(Json(found.into()))
}
