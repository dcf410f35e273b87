use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api_models::stock_money_flow_all::{
    CreateStockMoneyFlowAll, MoneyFlowAllQuery, StockMoneyFlowAllResponse, UpdateStockMoneyFlowAllRequest,
};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::optional_date;
use crate::models::{NewStockMoneyFlowAll, StockMoneyFlowAll, UpdateStockMoneyFlowAll};
use crate::repositories::stock_money_flow_all;
use crate::services::series_fetcher::TimeSpan;

impl From<StockMoneyFlowAll> for StockMoneyFlowAllResponse {
    fn from(row: StockMoneyFlowAll) -> Self {
        Self {
            id: row.id,
            time_span: row.time_span,
            serial_number: row.serial_number,
            symbol: row.symbol,
            name: row.name,
            latest_price: row.latest_price,
            change_percent: row.change_percent,
            turnover_rate: row.turnover_rate,
            inflow_amount: row.inflow_amount,
            outflow_amount: row.outflow_amount,
            net_amount: row.net_amount,
            turnover: row.turnover,
            trade_date: row.trade_date,
            created_at: row.created_at,
        }
    }
}

fn check_time_span(code: i32) -> Result<i32, AppError> {
    TimeSpan::from_code(i64::from(code))
        .map(TimeSpan::code)
        .ok_or_else(|| AppError::BadRequest(format!("unsupported time_span {code}, expected 0/3/5/10")))
}

pub async fn create_money_flow_all(
    State(state): State<AppState>,
    Json(payload): Json<CreateStockMoneyFlowAll>,
) -> Result<(StatusCode, Json<StockMoneyFlowAllResponse>), AppError> {
    let time_span = check_time_span(payload.time_span)?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_rec = NewStockMoneyFlowAll {
        time_span,
        serial_number: payload.serial_number,
        symbol: payload.symbol,
        name: payload.name,
        latest_price: payload.latest_price,
        change_percent: payload.change_percent,
        turnover_rate: payload.turnover_rate,
        inflow_amount: payload.inflow_amount,
        outflow_amount: payload.outflow_amount,
        net_amount: payload.net_amount,
        turnover: payload.turnover,
        trade_date: payload.trade_date,
    };
    let created = stock_money_flow_all::create(&mut conn, &new_rec).map_err(map_db_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn list_money_flow_alls(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockMoneyFlowAllResponse>>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let items = stock_money_flow_all::list_all(&mut conn).map_err(map_db_err)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn get_money_flow_all(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StockMoneyFlowAllResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_money_flow_all::find_by_id(&mut conn, id).map_err(map_db_err)?;
    Ok(Json(found.into()))
}

/// trade_date、time_span 都是可选过滤条件
pub async fn get_money_flow_all_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<MoneyFlowAllQuery>,
) -> Result<Json<Vec<StockMoneyFlowAllResponse>>, AppError> {
    let date = optional_date(query.trade_date.as_deref(), "trade_date")?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let items = stock_money_flow_all::find_by_symbol(&mut conn, &symbol, date, query.time_span)
        .map_err(map_db_err)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn update_money_flow_all(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStockMoneyFlowAllRequest>,
) -> Result<Json<StockMoneyFlowAllResponse>, AppError> {
    let time_span = payload.time_span.map(check_time_span).transpose()?;
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let update_data = UpdateStockMoneyFlowAll {
        time_span,
        serial_number: payload.serial_number,
        symbol: payload.symbol,
        name: payload.name,
        latest_price: payload.latest_price,
        change_percent: payload.change_percent,
        turnover_rate: payload.turnover_rate,
        inflow_amount: payload.inflow_amount,
        outflow_amount: payload.outflow_amount,
        net_amount: payload.net_amount,
        turnover: payload.turnover,
        trade_date: payload.trade_date,
    };
    let updated = stock_money_flow_all::update_by_id(&mut conn, id, &update_data).map_err(map_db_err)?;
    Ok(Json(updated.into()))
}

pub async fn delete_money_flow_all(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let affected = stock_money_flow_all::delete_by_id(&mut conn, id).map_err(map_db_err)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_time_spans_are_accepted() {
        for code in [0, 3, 5, 10] {
            assert_eq!(check_time_span(code).unwrap(), code);
        }
        assert!(check_time_span(7).is_err());
    }
}
