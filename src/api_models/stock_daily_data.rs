use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct TradeDateQuery {
    /// YYYY-MM-DD
    pub trade_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStockDailyData {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
    #[serde(default)]
    pub adj_close: BigDecimal,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub turnover: BigDecimal,
    #[serde(default)]
    pub change_percent: BigDecimal,
    #[serde(default)]
    pub change_amount: BigDecimal,
    #[serde(default)]
    pub turnover_rate: BigDecimal,
    #[serde(default)]
    pub pe_ttm: BigDecimal,
    #[serde(default)]
    pub pb: BigDecimal,
    #[serde(default)]
    pub amplitude: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct StockDailyDataResponse {
    pub id: i32,
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
    pub adj_close: BigDecimal,
    pub volume: i64,
    pub turnover: BigDecimal,
    pub change_percent: BigDecimal,
    pub change_amount: BigDecimal,
    pub turnover_rate: BigDecimal,
    pub pe_ttm: BigDecimal,
    pub pb: BigDecimal,
    pub amplitude: BigDecimal,
    pub created_at: NaiveDateTime,
}
