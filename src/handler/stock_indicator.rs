use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api_models::stock_indicator::{
    CalcDateQuery, CreateStockIndicator, StockIndicatorResponse, UpdateStockIndicatorRequest,
};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::required_date;
use crate::models::{NewStockIndicator, StockIndicator, UpdateStockIndicator};
use crate::repositories::stock_indicator;

impl From<StockIndicator> for StockIndicatorResponse {
    fn from(ind: StockIndicator) -> Self {
        Self {
            id: ind.id,
            symbol: ind.symbol,
            calc_date: ind.calc_date,
            ma5: ind.ma5,
            ma10: ind.ma10,
            ma20: ind.ma20,
            ma60: ind.ma60,
            macd: ind.macd,
            dif: ind.dif,
            dea: ind.dea,
            k: ind.k,
            d: ind.d,
            j: ind.j,
            rsi6: ind.rsi6,
            rsi12: ind.rsi12,
            rsi24: ind.rsi24,
            boll_upper: ind.boll_upper,
            boll_mid: ind.boll_mid,
            boll_lower: ind.boll_lower,
            created_at: ind.created_at,
        }
    }
}

/// 写入某日技术指标
pub async fn create_indicator(
    State(state): State<AppState>,
    Json(payload): Json<CreateStockIndicator>,
) -> Result<(StatusCode, Json<StockIndicatorResponse>), AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_rec = NewStockIndicator {
        symbol: payload.symbol,
        calc_date: payload.calc_date,
        ma5: payload.ma5,
        ma10: payload.ma10,
        ma20: payload.ma20,
        ma60: payload.ma60,
        macd: payload.macd,
        dif: payload.dif,
        dea: payload.dea,
        k: payload.k,
        d: payload.d,
        j: payload.j,
        rsi6: payload.rsi6,
        rsi12: payload.rsi12,
        rsi24: payload.rsi24,
        boll_upper: payload.boll_upper,
        boll_mid: payload.boll_mid,
        boll_lower: payload.boll_lower,
    };
    let created = stock_indicator::create(&mut conn, &new_rec).map_err(map_db_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn list_indicators(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockIndicatorResponse>>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let items = stock_indicator::list_all(&mut conn).map_err(map_db_err)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn get_indicator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StockIndicatorResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_indicator::find_by_id(&mut conn, id).map_err(map_db_err)?;
    Ok(Json(found.into()))
}

/// calc_date 必填
pub async fn get_indicator_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<CalcDateQuery>,
) -> Result<Json<StockIndicatorResponse>, AppError> {
    let date = required_date(query.calc_date.as_deref(), "calc_date")?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_indicator::find_by_symbol_and_date(&mut conn, &symbol, date).map_err(map_db_err)?;
    Ok(Json(found.into()))
}

/// 部分更新，未提供的字段保持原值
pub async fn update_indicator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStockIndicatorRequest>,
) -> Result<Json<StockIndicatorResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let update_data = UpdateStockIndicator {
        symbol: payload.symbol,
        calc_date: payload.calc_date,
        ma5: payload.ma5,
        ma10: payload.ma10,
        ma20: payload.ma20,
        ma60: payload.ma60,
        macd: payload.macd,
        dif: payload.dif,
        dea: payload.dea,
        k: payload.k,
        d: payload.d,
        j: payload.j,
        rsi6: payload.rsi6,
        rsi12: payload.rsi12,
        rsi24: payload.rsi24,
        boll_upper: payload.boll_upper,
        boll_mid: payload.boll_mid,
        boll_lower: payload.boll_lower,
    };
    let updated = stock_indicator::update_by_id(&mut conn, id, &update_data).map_err(map_db_err)?;
    Ok(Json(updated.into()))
}
