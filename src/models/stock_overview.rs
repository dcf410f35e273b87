use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::stock_history_mv;

/// stock_history_mv 视图中的一行，只读
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_history_mv)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockOverview {
    pub symbol: String,
    pub name: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub close: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub volume: BigDecimal,
    pub turnover_rate: BigDecimal,
    pub change_percent: BigDecimal,
    pub inflow_amount: BigDecimal,
    pub outflow_amount: BigDecimal,
    pub net_amount: BigDecimal,
    pub turnover: BigDecimal,
}
