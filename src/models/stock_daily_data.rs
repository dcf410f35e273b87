use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::stock_daily_data;

/// 日线行情，历史对齐的锚定序列
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_daily_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockDailyData {
    pub id: i32,
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
    pub adj_close: BigDecimal,
    pub volume: i64,
    pub turnover: BigDecimal,
    pub change_percent: BigDecimal,
    pub change_amount: BigDecimal,
    pub turnover_rate: BigDecimal,
    pub pe_ttm: BigDecimal,
    pub pb: BigDecimal,
    pub amplitude: BigDecimal,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_daily_data)]
pub struct NewStockDailyData {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
    pub adj_close: BigDecimal,
    pub volume: i64,
    pub turnover: BigDecimal,
    pub change_percent: BigDecimal,
    pub change_amount: BigDecimal,
    pub turnover_rate: BigDecimal,
    pub pe_ttm: BigDecimal,
    pub pb: BigDecimal,
    pub amplitude: BigDecimal,
}
