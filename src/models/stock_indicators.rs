use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::stock_indicators;

/// 技术指标，每个字段都可能尚未计算
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_indicators)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockIndicator {
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

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_indicators)]
pub struct NewStockIndicator {
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

/// None 字段不参与更新
#[derive(AsChangeset, Debug, Default, Clone)]
#[diesel(table_name = stock_indicators)]
pub struct UpdateStockIndicator {
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
