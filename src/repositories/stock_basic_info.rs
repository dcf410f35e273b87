use diesel::prelude::*;
use diesel::OptionalExtension;

use super::{like_contains, PgPoolConn};
use crate::models::{NewStockBasicInfo, StockBasicInfo, UpdateStockBasicInfo};
use crate::schema::stock_basic_info::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_stock: &NewStockBasicInfo) -> Result<StockBasicInfo, diesel::result::Error> {
    diesel::insert_into(stock_basic_info)
        .values(new_stock)
        .returning(StockBasicInfo::as_returning())
        .get_result(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, stock_id: i32) -> Result<StockBasicInfo, diesel::result::Error> {
    stock_basic_info
        .find(stock_id)
        .select(StockBasicInfo::as_select())
        .first(conn)
}

pub fn find_by_symbol(conn: &mut PgPoolConn, code: &str) -> Result<StockBasicInfo, diesel::result::Error> {
    stock_basic_info
        .filter(symbol.eq(code))
        .select(StockBasicInfo::as_select())
        .first(conn)
}

/// 按代码或名称精确匹配，取第一条
pub fn find_by_symbol_or_name(
    conn: &mut PgPoolConn,
    token: &str,
) -> Result<Option<StockBasicInfo>, diesel::result::Error> {
    stock_basic_info
        .filter(symbol.eq(token).or(name.eq(token)))
        .order(id.asc())
        .select(StockBasicInfo::as_select())
        .first(conn)
        .optional()
}

/// 代码或名称子串匹配（区分大小写），用于联想输入
pub fn search(
    conn: &mut PgPoolConn,
    keyword: &str,
    max_rows: i64,
) -> Result<Vec<StockBasicInfo>, diesel::result::Error> {
    let pattern = like_contains(keyword);
    stock_basic_info
        .filter(symbol.like(pattern.clone()).or(name.like(pattern)))
        .limit(max_rows)
        .select(StockBasicInfo::as_select())
        .load(conn)
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    stock_id: i32,
    update_data: &UpdateStockBasicInfo,
) -> Result<StockBasicInfo, diesel::result::Error> {
    diesel::update(stock_basic_info.find(stock_id))
        .set(update_data)
        .returning(StockBasicInfo::as_returning())
        .get_result(conn)
}
