use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api_models::stock_daily_data::{CreateStockDailyData, StockDailyDataResponse, TradeDateQuery};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::optional_date;
use crate::models::{NewStockDailyData, StockDailyData};
use crate::repositories::stock_daily_data;

impl From<StockDailyData> for StockDailyDataResponse {
    fn from(row: StockDailyData) -> Self {
        Self {
            id: row.id,
            symbol: row.symbol,
            trade_date: row.trade_date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            adj_close: row.adj_close,
            volume: row.volume,
            turnover: row.turnover,
            change_percent: row.change_percent,
            change_amount: row.change_amount,
            turnover_rate: row.turnover_rate,
            pe_ttm: row.pe_ttm,
            pb: row.pb,
            amplitude: row.amplitude,
            created_at: row.created_at,
        }
    }
}

/// 写入单日行情
pub async fn create_daily_data(
    State(state): State<AppState>,
    Json(payload): Json<CreateStockDailyData>,
) -> Result<(StatusCode, Json<StockDailyDataResponse>), AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_rec = NewStockDailyData {
        symbol: payload.symbol,
        trade_date: payload.trade_date,
        open: payload.open,
        high: payload.high,
        low: payload.low,
        close: payload.close,
        adj_close: payload.adj_close,
        volume: payload.volume,
        turnover: payload.turnover,
        change_percent: payload.change_percent,
        change_amount: payload.change_amount,
        turnover_rate: payload.turnover_rate,
        pe_ttm: payload.pe_ttm,
        pb: payload.pb,
        amplitude: payload.amplitude,
    };
    let created = stock_daily_data::create(&mut conn, &new_rec).map_err(map_db_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn list_daily_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockDailyDataResponse>>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let items = stock_daily_data::list_all(&mut conn).map_err(map_db_err)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// 某只股票的日线，可选按 trade_date 过滤；无数据时 404
pub async fn get_daily_data_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<TradeDateQuery>,
) -> Result<Json<Vec<StockDailyDataResponse>>, AppError> {
    let date = optional_date(query.trade_date.as_deref(), "trade_date")?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let items = stock_daily_data::find_by_symbol(&mut conn, &symbol, date).map_err(map_db_err)?;
    if items.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
