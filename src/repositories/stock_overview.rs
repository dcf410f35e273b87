use bigdecimal::BigDecimal;
use diesel::prelude::*;

use super::PgPoolConn;
use crate::models::StockOverview;
use crate::schema::stock_history_mv::dsl::*;

/// 按代码升序分页，返回 (当前页, 总数)
pub fn list_page(
    conn: &mut PgPoolConn,
    offset: i64,
    limit: i64,
) -> Result<(Vec<StockOverview>, i64), diesel::result::Error> {
    let total = stock_history_mv.count().get_result::<i64>(conn)?;
    let rows = stock_history_mv
        .order(symbol.asc())
        .offset(offset)
        .limit(limit)
        .select(StockOverview::as_select())
        .load(conn)?;
    Ok((rows, total))
}

/// 涨幅严格大于 threshold，按涨幅倒序分页
pub fn hot_page(
    conn: &mut PgPoolConn,
    threshold: &BigDecimal,
    offset: i64,
    limit: i64,
) -> Result<(Vec<StockOverview>, i64), diesel::result::Error> {
    let total = stock_history_mv
        .filter(change_percent.gt(threshold.clone()))
        .count()
        .get_result::<i64>(conn)?;
    let rows = stock_history_mv
        .filter(change_percent.gt(threshold.clone()))
        .order(change_percent.desc())
        .offset(offset)
        .limit(limit)
        .select(StockOverview::as_select())
        .load(conn)?;
    Ok((rows, total))
}
