use chrono::NaiveDate;
use diesel::prelude::*;

use super::PgPoolConn;
use crate::models::{NewStockMoneyFlow, StockMoneyFlow};
use crate::schema::stock_money_flow::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_rec: &NewStockMoneyFlow) -> Result<StockMoneyFlow, diesel::result::Error> {
    diesel::insert_into(stock_money_flow)
        .values(new_rec)
        .returning(StockMoneyFlow::as_returning())
        .get_result(conn)
}

pub fn find_by_symbol_and_date(
    conn: &mut PgPoolConn,
    code: &str,
    date: NaiveDate,
) -> Result<StockMoneyFlow, diesel::result::Error> {
    stock_money_flow
        .filter(symbol.eq(code))
        .filter(trade_date.eq(date))
        .select(StockMoneyFlow::as_select())
        .first(conn)
}

pub fn find_recent(
    conn: &mut PgPoolConn,
    code: &str,
    limit: i64,
) -> Result<Vec<StockMoneyFlow>, diesel::result::Error> {
    stock_money_flow
        .filter(symbol.eq(code))
        .order(trade_date.desc())
        .limit(limit)
        .select(StockMoneyFlow::as_select())
        .load(conn)
}
