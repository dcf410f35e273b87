use chrono::NaiveDate;
use diesel::prelude::*;

use super::PgPoolConn;
use crate::models::{NewStockMoneyFlowAll, StockMoneyFlowAll, UpdateStockMoneyFlowAll};
use crate::schema::stock_money_flow_all::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_rec: &NewStockMoneyFlowAll) -> Result<StockMoneyFlowAll, diesel::result::Error> {
    diesel::insert_into(stock_money_flow_all)
        .values(new_rec)
        .returning(StockMoneyFlowAll::as_returning())
        .get_result(conn)
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<StockMoneyFlowAll>, diesel::result::Error> {
    stock_money_flow_all
        .order(id.asc())
        .select(StockMoneyFlowAll::as_select())
        .load(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, flow_id: i32) -> Result<StockMoneyFlowAll, diesel::result::Error> {
    stock_money_flow_all
        .find(flow_id)
        .select(StockMoneyFlowAll::as_select())
        .first(conn)
}

/// trade_date / time_span 为可选过滤条件
pub fn find_by_symbol(
    conn: &mut PgPoolConn,
    code: &str,
    date: Option<NaiveDate>,
    span: Option<i32>,
) -> Result<Vec<StockMoneyFlowAll>, diesel::result::Error> {
    let mut query = stock_money_flow_all
        .filter(symbol.eq(code))
        .select(StockMoneyFlowAll::as_select())
        .into_boxed();
    if let Some(date) = date {
        query = query.filter(trade_date.eq(date));
    }
    if let Some(span) = span {
        query = query.filter(time_span.eq(span));
    }
    query.order((trade_date.desc(), time_span.asc())).load(conn)
}

/// 某个时间跨度下最近 limit 条，按 trade_date 倒序
pub fn find_recent(
    conn: &mut PgPoolConn,
    code: &str,
    span: i32,
    limit: i64,
) -> Result<Vec<StockMoneyFlowAll>, diesel::result::Error> {
    stock_money_flow_all
        .filter(symbol.eq(code))
        .filter(time_span.eq(span))
        .order(trade_date.desc())
        .limit(limit)
        .select(StockMoneyFlowAll::as_select())
        .load(conn)
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    flow_id: i32,
    update_data: &UpdateStockMoneyFlowAll,
) -> Result<StockMoneyFlowAll, diesel::result::Error> {
    let updated = diesel::update(stock_money_flow_all.find(flow_id))
        .set(update_data)
        .returning(StockMoneyFlowAll::as_returning())
        .get_result(conn);
    match updated {
        Err(diesel::result::Error::QueryBuilderError(_)) => find_by_id(conn, flow_id),
        other => other,
    }
}

pub fn delete_by_id(conn: &mut PgPoolConn, flow_id: i32) -> Result<usize, diesel::result::Error> {
    diesel::delete(stock_money_flow_all.find(flow_id)).execute(conn)
}
