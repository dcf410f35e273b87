use chrono::NaiveDate;
use diesel::prelude::*;

use super::PgPoolConn;
use crate::models::{NewStockIndicator, StockIndicator, UpdateStockIndicator};
use crate::schema::stock_indicators::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_rec: &NewStockIndicator) -> Result<StockIndicator, diesel::result::Error> {
    diesel::insert_into(stock_indicators)
        .values(new_rec)
        .returning(StockIndicator::as_returning())
        .get_result(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<StockIndicator>, diesel::result::Error> {
    stock_indicators
        .order(id.asc())
        .select(StockIndicator::as_select())
        .load(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, indicator_id: i32) -> Result<StockIndicator, diesel::result::Error> {
    stock_indicators
        .find(indicator_id)
        .select(StockIndicator::as_select())
        .first(conn)
}

pub fn find_by_symbol_and_date(
    conn: &mut PgPoolConn,
    code: &str,
    date: NaiveDate,
) -> Result<StockIndicator, diesel::result::Error> {
    stock_indicators
        .filter(symbol.eq(code))
        .filter(calc_date.eq(date))
        .select(StockIndicator::as_select())
        .first(conn)
}

/// 最近 limit 条指标，按 calc_date 倒序
pub fn find_recent(
    conn: &mut PgPoolConn,
    code: &str,
    limit: i64,
) -> Result<Vec<StockIndicator>, diesel::result::Error> {
    stock_indicators
        .filter(symbol.eq(code))
        .order(calc_date.desc())
        .limit(limit)
        .select(StockIndicator::as_select())
        .load(conn)
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    indicator_id: i32,
    update_data: &UpdateStockIndicator,
) -> Result<StockIndicator, diesel::result::Error> {
    let updated = diesel::update(stock_indicators.find(indicator_id))
        .set(update_data)
        .returning(StockIndicator::as_returning())
        .get_result(conn);
    match updated {
        // 空变更集：没有字段需要更新，直接返回当前记录
        Err(diesel::result::Error::QueryBuilderError(_)) => find_by_id(conn, indicator_id),
        other => other,
    }
}
