use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct CalcDateQuery {
    /// YYYY-MM-DD，必填
    pub calc_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStockIndicator {
    pub symbol: String,
    pub calc_date: NaiveDate,
    pub ma5: Option<BigDecimal>,
    pub ma10: Option<BigDecimal>,
    pub ma20: Option<BigDecimal>,
    pub ma60: Option<BigDecimal>,
    pub macd: Option<BigDecimal>,
    pub dif: Option<BigDecimal>,
    pub dea: Option<BigDecimal>,
    pub k: Option<BigDecimal>,
    pub d: Option<BigDecimal>,
    pub j: Option<BigDecimal>,
    pub rsi6: Option<BigDecimal>,
    pub rsi12: Option<BigDecimal>,
    pub rsi24: Option<BigDecimal>,
    pub boll_upper: Option<BigDecimal>,
    pub boll_mid: Option<BigDecimal>,
    pub boll_lower: Option<BigDecimal>,
}

/// 部分更新，缺省字段保持不变
#[derive(Debug, Deserialize, Default)]
pub struct UpdateStockIndicatorRequest {
    pub symbol: Option<String>,
    pub calc_date: Option<NaiveDate>,
    pub ma5: Option<BigDecimal>,
    pub ma10: Option<BigDecimal>,
    pub ma20: Option<BigDecimal>,
    pub ma60: Option<BigDecimal>,
    pub macd: Option<BigDecimal>,
    pub dif: Option<BigDecimal>,
    pub dea: Option<BigDecimal>,
    pub k: Option<BigDecimal>,
    pub d: Option<BigDecimal>,
    pub j: Option<BigDecimal>,
    pub rsi6: Option<BigDecimal>,
    pub rsi12: Option<BigDecimal>,
    pub rsi24: Option<BigDecimal>,
    pub boll_upper: Option<BigDecimal>,
    pub boll_mid: Option<BigDecimal>,
    pub boll_lower: Option<BigDecimal>,
}

#[derive(Debug, Serialize)]
pub struct StockIndicatorResponse {
    pub id: i32,
    pub symbol: String,
    pub calc_date: NaiveDate,
    pub ma5: Option<BigDecimal>,
    pub ma10: Option<BigDecimal>,
    pub ma20: Option<BigDecimal>,
    pub ma60: Option<BigDecimal>,
    pub macd: Option<BigDecimal>,
    pub dif: Option<BigDecimal>,
    pub dea: Option<BigDecimal>,
    pub k: Option<BigDecimal>,
    pub d: Option<BigDecimal>,
    pub j: Option<BigDecimal>,
    pub rsi6: Option<BigDecimal>,
    pub rsi12: Option<BigDecimal>,
    pub rsi24: Option<BigDecimal>,
    pub boll_upper: Option<BigDecimal>,
    pub boll_mid: Option<BigDecimal>,
    pub boll_lower: Option<BigDecimal>,
    pub created_at: NaiveDateTime,
}
