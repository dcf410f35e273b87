use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct MoneyFlowAllQuery {
    pub trade_date: Option<String>,
    pub time_span: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStockMoneyFlowAll {
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

#[derive(Debug, Deserialize, Default)]
pub struct UpdateStockMoneyFlowAllRequest {
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

#[derive(Debug, Serialize)]
pub struct StockMoneyFlowAllResponse {
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
