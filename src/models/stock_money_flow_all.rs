use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::stock_money_flow_all;

/// 全市场资金流排行，按 time_span (0/3/5/10 日) 分桶
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_money_flow_all)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockMoneyFlowAll {
    pub id: i32,
    pub time_span: i32,
    pub serial_number: Option<i32>,
    pub symbol: String,
    pub name: Option<String>,
    pub latest_price: Option<BigDecimal>,
    pub change_percent: Option<BigDecimal>,
    pub turnover_rate: Option<BigDecimal>,
    pub inflow_amount: Option<BigDecimal>,
    pub outflow_amount: Option<BigDecimal>,
    pub net_amount: Option<BigDecimal>,
    pub turnover: Option<BigDecimal>,
    pub trade_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_money_flow_all)]
pub struct NewStockMoneyFlowAll {
    pub time_span: i32,
    pub serial_number: Option<i32>,
    pub symbol: String,
    pub name: Option<String>,
    pub latest_price: Option<BigDecimal>,
    pub change_percent: Option<BigDecimal>,
    pub turnover_rate: Option<BigDecimal>,
    pub inflow_amount: Option<BigDecimal>,
    pub outflow_amount: Option<BigDecimal>,
    pub net_amount: Option<BigDecimal>,
    pub turnover: Option<BigDecimal>,
    pub trade_date: NaiveDate,
}

#[derive(AsChangeset, Debug, Default, Clone)]
#[diesel(table_name = stock_money_flow_all)]
pub struct UpdateStockMoneyFlowAll {
    pub time_span: Option<i32>,
    pub serial_number: Option<i32>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub latest_price: Option<BigDecimal>,
    pub change_percent: Option<BigDecimal>,
    pub turnover_rate: Option<BigDecimal>,
    pub inflow_amount: Option<BigDecimal>,
    pub outflow_amount: Option<BigDecimal>,
    pub net_amount: Option<BigDecimal>,
    pub turnover: Option<BigDecimal>,
    pub trade_date: Option<NaiveDate>,
}
