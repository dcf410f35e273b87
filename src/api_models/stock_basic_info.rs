use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateStockBasicInfo {
    pub symbol: String,
    pub name: String,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateStockBasicInfoRequest {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StockBasicInfoResponse {
    pub id: i32,
    pub symbol: String,
    pub name: String,
    pub full_name: Option<String>,
    pub industry: Option<String>,
    pub area: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    pub outstanding_shares: Option<BigDecimal>,
    pub total_shares: Option<BigDecimal>,
    pub is_hs: Option<bool>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
