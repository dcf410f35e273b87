use crate::models::{StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll};
use crate::utils::query_params::parse_lenient_i64;

use super::record_enricher::FlowRecord;
use super::stock_store::{StockStore, StoreError};

pub const DEFAULT_DAYS: i64 = 7;

/// 非法或非正数一律回落到默认 7 天
pub fn normalize_days(raw: Option<&str>) -> i64 {
    match parse_lenient_i64(raw) {
        Some(days) if days > 0 => days,
        _ => DEFAULT_DAYS,
    }
}

/// 全市场资金流的时间跨度分桶
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSpan {
    #[default]
    Today,
    ThreeDays,
    FiveDays,
    TenDays,
}

impl TimeSpan {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Today),
            3 => Some(Self::ThreeDays),
            5 => Some(Self::FiveDays),
            10 => Some(Self::TenDays),
            _ => None,
        }
    }

    /// 缺省或不在 0/3/5/10 之内时取当日
    pub fn from_raw(raw: Option<&str>) -> Self {
        parse_lenient_i64(raw)
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Today => 0,
            Self::ThreeDays => 3,
            Self::FiveDays => 5,
            Self::TenDays => 10,
        }
    }
}

/// 资金流序列的来源：个股资金流或按时间跨度的全市场资金流
pub trait FlowSource {
    type Record: FlowRecord;

    fn fetch_recent(
        &self,
        store: &dyn StockStore,
        symbol: &str,
        limit: i64,
    ) -> Result<Vec<Self::Record>, StoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerSymbolFlow;

impl FlowSource for PerSymbolFlow {
    type Record = StockMoneyFlow;

    fn fetch_recent(
        &self,
        store: &dyn StockStore,
        symbol: &str,
        limit: i64,
    ) -> Result<Vec<StockMoneyFlow>, StoreError> {
        store.recent_money_flows(symbol, limit)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatedFlow {
    pub time_span: TimeSpan,
}

impl FlowSource for AggregatedFlow {
    type Record = StockMoneyFlowAll;

    fn fetch_recent(
        &self,
        store: &dyn StockStore,
        symbol: &str,
        limit: i64,
    ) -> Result<Vec<StockMoneyFlowAll>, StoreError> {
        store.recent_money_flow_alls(symbol, self.time_span.code(), limit)
    }
}

/// 三条互相独立的序列，各自按日期倒序、各自限制 days 条
#[derive(Debug)]
pub struct SeriesBundle<R> {
    pub daily: Vec<StockDailyData>,
    pub indicators: Vec<StockIndicator>,
    pub flows: Vec<R>,
}

/// 分别查询三条序列，这里不做任何关联。空结果是合法的，在对齐阶段表现为缺口。
pub fn fetch_series<S: FlowSource>(
    store: &dyn StockStore,
    symbol: &str,
    days: i64,
    source: &S,
) -> Result<SeriesBundle<S::Record>, StoreError> {
    let daily = store.recent_daily_data(symbol, days)?;
    let indicators = store.recent_indicators(symbol, days)?;
    let flows = source.fetch_recent(store, symbol, days)?;

    tracing::debug!(
        symbol,
        days,
        daily = daily.len(),
        indicators = indicators.len(),
        flows = flows.len(),
        "fetched stock series"
    );

    Ok(SeriesBundle {
        daily,
        indicators,
        flows,
    })
}
