use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateStockMoneyFlow {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub main_net: Option<BigDecimal>,
    pub retail_net: Option<BigDecimal>,
    pub large_order_ratio: Option<BigDecimal>,
    pub medium_order_ratio: Option<BigDecimal>,
    pub small_order_ratio: Option<BigDecimal>,
}

#[derive(Debug, Serialize)]
pub struct StockMoneyFlowResponse {
    pub id: i32,
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub main_net: Option<BigDecimal>,
    pub retail_net: Option<BigDecimal>,
    pub large_order_ratio: Option<BigDecimal>,
    pub medium_order_ratio: Option<BigDecimal>,
    pub small_order_ratio: Option<BigDecimal>,
    pub created_at: NaiveDateTime,
}
