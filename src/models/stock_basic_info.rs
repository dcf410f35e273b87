use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::stock_basic_info;

/// 股票基础信息（参考数据，symbol 唯一）
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_basic_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockBasicInfo {
    pub id: i32,
    pub symbol: String,
    pub name: String,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_basic_info)]
pub struct NewStockBasicInfo {
    pub symbol: String,
    pub name: String,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Clone)]
#[diesel(table_name = stock_basic_info)]
pub struct UpdateStockBasicInfo {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}
