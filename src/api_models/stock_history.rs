use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::record_enricher::EnrichedDay;

/// /stocks/history 与 /stocks/history/all 的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// 股票代码或名称
    pub symbol: Option<String>,
    /// 最近几天，默认 7
    pub days: Option<String>,
    /// 仅 /history/all 使用：0/3/5/10
    pub time_span: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StockHistoryResponse<F> {
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub market: Option<String>,
    pub listing_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_span: Option<i32>,
    pub daily_data: Vec<EnrichedDay<F>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HotQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    /// 涨幅阈值，默认 5
    pub threshold: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// 概览行（stock_history_mv）
#[derive(Debug, Serialize)]
pub struct StockOverviewResponse {
    pub symbol: String,
    pub name: String,
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub close: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub volume: BigDecimal,
    pub turnover_rate: BigDecimal,
    pub change_percent: BigDecimal,
    pub in_amount: BigDecimal,
    pub out_amount: BigDecimal,
    pub net_amount: BigDecimal,
    pub turnover: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct HotStocksResponse {
    pub page: i64,
    pub page_size: i64,
    pub threshold: f64,
    pub total: i64,
    pub data: Vec<StockOverviewResponse>,
}

/// 联想搜索结果
#[derive(Debug, Serialize)]
pub struct StockSearchItem {
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub market: Option<String>,
}
