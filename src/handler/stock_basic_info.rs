use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api_models::stock_basic_info::{
    CreateStockBasicInfo, StockBasicInfoResponse, UpdateStockBasicInfoRequest,
};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::models::{NewStockBasicInfo, StockBasicInfo, UpdateStockBasicInfo};
use crate::repositories::stock_basic_info;

impl From<StockBasicInfo> for StockBasicInfoResponse {
    fn from(stock: StockBasicInfo) -> Self {
        Self {
            id: stock.id,
            symbol: stock.symbol,
            name: stock.name,
            full_name: stock.full_name,
            industry: stock.industry,
            area: stock.area,
            market: stock.market,
            listing_date: stock.listing_date,
            outstanding_shares: stock.outstanding_shares,
            total_shares: stock.total_shares,
            is_hs: stock.is_hs,
            status: stock.status,
            created_at: stock.created_at,
            updated_at: stock.updated_at,
        }
    }
}

/// 新增股票基础信息
pub async fn create_stock(
    State(state): State<AppState>,
    Json(payload): Json<CreateStockBasicInfo>,
) -> Result<(StatusCode, Json<StockBasicInfoResponse>), AppError> {
    if payload.symbol.trim().is_empty() || payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("symbol and name are required".to_string()));
    }
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_stock = NewStockBasicInfo {
        symbol: payload.symbol,
        name: payload.name,
        full_name: payload.full_name,
        industry: payload.industry,
        area: payload.area,
        market: payload.market,
        listing_date: payload.listing_date,
        outstanding_shares: payload.outstanding_shares,
        total_shares: payload.total_shares,
        is_hs: payload.is_hs,
        status: payload.status,
    };
    let created = stock_basic_info::create(&mut conn, &new_stock).map_err(map_db_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StockBasicInfoResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_basic_info::find_by_id(&mut conn, id).map_err(map_db_err)?;
    Ok(Json(found.into()))
}

pub async fn get_stock_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockBasicInfoResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = stock_basic_info::find_by_symbol(&mut conn, &symbol).map_err(map_db_err)?;
    Ok(Json(found.into()))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStockBasicInfoRequest>,
) -> Result<Json<StockBasicInfoResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let update_data = UpdateStockBasicInfo {
        symbol: payload.symbol,
        name: payload.name,
        full_name: payload.full_name,
        industry: payload.industry,
        area: payload.area,
        market: payload.market,
        listing_date: payload.listing_date,
        outstanding_shares: payload.outstanding_shares,
        total_shares: payload.total_shares,
        is_hs: payload.is_hs,
        status: payload.status,
        updated_at: Some(Utc::now().naive_utc()),
    };
    let updated = stock_basic_info::update_by_id(&mut conn, id, &update_data).map_err(map_db_err)?;
    Ok(Json(updated.into()))
}
