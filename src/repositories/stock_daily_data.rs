use chrono::NaiveDate;
use diesel::prelude::*;

use super::PgPoolConn;
use crate::models::{NewStockDailyData, StockDailyData};
use crate::schema::stock_daily_data::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_rec: &NewStockDailyData) -> Result<StockDailyData, diesel::result::Error> {
    diesel::insert_into(stock_daily_data)
        .values(new_rec)
        .returning(StockDailyData::as_returning())
        .get_result(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<StockDailyData>, diesel::result::Error> {
    stock_daily_data
        .order((symbol.asc(), trade_date.desc()))
        .select(StockDailyData::as_select())
        .load(conn)
}

pub fn find_by_symbol(
    conn: &mut PgPoolConn,
    code: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<StockDailyData>, diesel::result::Error> {
    let mut query = stock_daily_data
        .filter(symbol.eq(code))
        .select(StockDailyData::as_select())
        .into_boxed();
    if let Some(date) = date {
        query = query.filter(trade_date.eq(date));
    }
    query.order(trade_date.desc()).load(conn)
}

/// 最近 limit 个交易日，按日期倒序
pub fn find_recent(
    conn: &mut PgPoolConn,
    code: &str,
    limit: i64,
) -> Result<Vec<StockDailyData>, diesel::result::Error> {
    stock_daily_data
        .filter(symbol.eq(code))
        .order(trade_date.desc())
        .limit(limit)
        .select(StockDailyData::as_select())
        .load(conn)
}
