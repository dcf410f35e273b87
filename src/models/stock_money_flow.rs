use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::stock_money_flow;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = stock_money_flow)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StockMoneyFlow {
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

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stock_money_flow)]
pub struct NewStockMoneyFlow {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub main_net: Option<BigDecimal>,
    pub retail_net: Option<BigDecimal>,
    pub large_order_ratio: Option<BigDecimal>,
    pub medium_order_ratio: Option<BigDecimal>,
    pub small_order_ratio: Option<BigDecimal>,
}
