//! 测试用的内存 StockStore 实现。

use crate::models::{
    StockBasicInfo, StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll, StockOverview,
};

use super::date_aligner::DatedRecord;
use super::stock_store::{OverviewFilter, StockStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub basics: Vec<StockBasicInfo>,
    pub daily: Vec<StockDailyData>,
    pub indicators: Vec<StockIndicator>,
    pub flows: Vec<StockMoneyFlow>,
    pub flow_alls: Vec<StockMoneyFlowAll>,
    pub overviews: Vec<StockOverview>,
    /// 为 true 时所有查询返回存储错误
    pub broken: bool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Query(diesel::result::Error::BrokenTransactionManager));
        }
        Ok(())
    }
}

fn recent<T, P>(rows: &[T], limit: i64, keep: P) -> Vec<T>
where
    T: DatedRecord + Clone,
    P: Fn(&T) -> bool,
{
    let mut picked: Vec<T> = rows.iter().filter(|r| keep(r)).cloned().collect();
    picked.sort_by_key(|r| std::cmp::Reverse(r.record_date()));
    picked.truncate(limit.max(0) as usize);
    picked
}

fn page<T: Clone>(rows: Vec<T>, offset: i64, limit: i64) -> (Vec<T>, i64) {
    let total = rows.len() as i64;
    let data = rows
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect();
    (data, total)
}

impl StockStore for MemoryStore {
    fn find_by_symbol_or_name(&self, token: &str) -> Result<Option<StockBasicInfo>, StoreError> {
        self.check()?;
        Ok(self
            .basics
            .iter()
            .find(|b| b.symbol == token || b.name == token)
            .cloned())
    }

    fn search_basic_info(&self, keyword: &str, limit: i64) -> Result<Vec<StockBasicInfo>, StoreError> {
        self.check()?;
        Ok(self
            .basics
            .iter()
            .filter(|b| b.symbol.contains(keyword) || b.name.contains(keyword))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    fn recent_daily_data(&self, symbol: &str, limit: i64) -> Result<Vec<StockDailyData>, StoreError> {
        self.check()?;
        Ok(recent(&self.daily, limit, |r| r.symbol == symbol))
    }

    fn recent_indicators(&self, symbol: &str, limit: i64) -> Result<Vec<StockIndicator>, StoreError> {
        self.check()?;
        Ok(recent(&self.indicators, limit, |r| r.symbol == symbol))
    }

    fn recent_money_flows(&self, symbol: &str, limit: i64) -> Result<Vec<StockMoneyFlow>, StoreError> {
        self.check()?;
        Ok(recent(&self.flows, limit, |r| r.symbol == symbol))
    }

    fn recent_money_flow_alls(
        &self,
        symbol: &str,
        time_span: i32,
        limit: i64,
    ) -> Result<Vec<StockMoneyFlowAll>, StoreError> {
        self.check()?;
        Ok(recent(&self.flow_alls, limit, |r| {
            r.symbol == symbol && r.time_span == time_span
        }))
    }

    fn overview_page(
        &self,
        filter: &OverviewFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<StockOverview>, i64), StoreError> {
        self.check()?;
        let mut rows: Vec<StockOverview> = match filter {
            OverviewFilter::All => self.overviews.clone(),
            OverviewFilter::ChangeAbove(threshold) => self
                .overviews
                .iter()
                .filter(|o| &o.change_percent > threshold)
                .cloned()
                .collect(),
        };
        match filter {
            OverviewFilter::All => rows.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
            OverviewFilter::ChangeAbove(_) => {
                rows.sort_by(|a, b| b.change_percent.cmp(&a.change_percent))
            }
        }
        Ok(page(rows, offset, limit))
    }
}

/// 构造测试数据
pub mod fixtures {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::models::{
        StockBasicInfo, StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll,
        StockOverview,
    };

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    pub fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn stamp() -> NaiveDateTime {
        day(1).and_hms_opt(0, 0, 0).unwrap()
    }

    pub fn basic(symbol: &str, name: &str) -> StockBasicInfo {
        StockBasicInfo {
            id: 1,
            symbol: symbol.to_string(),
            name: name.to_string(),
            full_name: None,
            industry: Some("银行".to_string()),
            area: Some("上海".to_string()),
            market: Some("主板".to_string()),
            listing_date: NaiveDate::from_ymd_opt(1999, 11, 10),
            outstanding_shares: None,
            total_shares: None,
            is_hs: Some(true),
            status: Some("上市".to_string()),
            created_at: stamp(),
            updated_at: stamp(),
        }
    }

    pub fn daily(symbol: &str, date: NaiveDate) -> StockDailyData {
        StockDailyData {
            id: 1,
            symbol: symbol.to_string(),
            trade_date: date,
            open: dec("10.00"),
            high: dec("10.50"),
            low: dec("9.80"),
            close: dec("10.20"),
            adj_close: dec("10.20"),
            volume: 120_000,
            turnover: dec("1224000"),
            change_percent: dec("2.00"),
            change_amount: dec("0.20"),
            turnover_rate: dec("0.35"),
            pe_ttm: dec("5.1"),
            pb: dec("0.6"),
            amplitude: dec("7.0"),
            created_at: stamp(),
        }
    }

    pub fn indicator(symbol: &str, date: NaiveDate, ma5: &str) -> StockIndicator {
        StockIndicator {
            id: 1,
            symbol: symbol.to_string(),
            calc_date: date,
            ma5: Some(dec(ma5)),
            ma10: Some(dec("10.1")),
            ma20: None,
            ma60: None,
            macd: Some(dec("0.12")),
            dif: Some(dec("0.08")),
            dea: Some(dec("0.02")),
            k: Some(dec("55")),
            d: Some(dec("50")),
            j: Some(dec("65")),
            rsi6: Some(dec("61.2")),
            rsi12: Some(dec("58.4")),
            rsi24: None,
            boll_upper: Some(dec("11.0")),
            boll_mid: Some(dec("10.2")),
            boll_lower: Some(dec("9.4")),
            created_at: stamp(),
        }
    }

    pub fn flow(symbol: &str, date: NaiveDate, main_net: &str) -> StockMoneyFlow {
        StockMoneyFlow {
            id: 1,
            symbol: symbol.to_string(),
            trade_date: date,
            main_net: Some(dec(main_net)),
            retail_net: Some(dec("-1.5")),
            large_order_ratio: Some(dec("30.1")),
            medium_order_ratio: Some(dec("40.2")),
            small_order_ratio: Some(dec("29.7")),
            created_at: stamp(),
        }
    }

    pub fn flow_all(symbol: &str, date: NaiveDate, time_span: i32, net: &str) -> StockMoneyFlowAll {
        StockMoneyFlowAll {
            id: 1,
            time_span,
            serial_number: Some(1),
            symbol: symbol.to_string(),
            name: None,
            latest_price: Some(dec("10.2")),
            change_percent: Some(dec("2.0")),
            turnover_rate: Some(dec("0.35")),
            inflow_amount: Some(dec("500")),
            outflow_amount: Some(dec("376.6")),
            net_amount: Some(dec(net)),
            turnover: Some(dec("1224000")),
            trade_date: date,
            created_at: stamp(),
        }
    }

    pub fn overview(symbol: &str, name: &str, change_percent: &str) -> StockOverview {
        StockOverview {
            symbol: symbol.to_string(),
            name: name.to_string(),
            trade_date: day(1),
            open: dec("10"),
            close: dec("10.5"),
            high: dec("10.8"),
            low: dec("9.9"),
            volume: dec("100000"),
            turnover_rate: dec("1.2"),
            change_percent: dec(change_percent),
            inflow_amount: dec("100"),
            outflow_amount: dec("80"),
            net_amount: dec("20"),
            turnover: dec("1050000"),
        }
    }
}
