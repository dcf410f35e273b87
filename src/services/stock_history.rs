use crate::models::StockBasicInfo;

use super::date_aligner;
use super::error::ServiceError;
use super::record_enricher::{self, EnrichedDay, FlowRecord};
use super::series_fetcher::{self, FlowSource};
use super::stock_lookup;
use super::stock_store::StockStore;

/// 对齐后的股票历史：基础信息 + 按日期升序的合并记录
#[derive(Debug)]
pub struct StockHistory<F> {
    pub basic: StockBasicInfo,
    pub daily_data: Vec<EnrichedDay<F>>,
}

/// 解析股票 -> 分别取三条序列 -> 以日线为锚按日期对齐 -> 合并输出。
///
/// 日线没有数据时返回空列表；任何一条序列查询失败都整体失败。
pub fn load_history<S: FlowSource>(
    store: &dyn StockStore,
    token: &str,
    days: i64,
    source: &S,
) -> Result<StockHistory<<S::Record as FlowRecord>::Fields>, ServiceError> {
    let basic = stock_lookup::resolve(store, token)?;
    let series = series_fetcher::fetch_series(store, &basic.symbol, days, source)?;

    let daily_data = date_aligner::align(&series.daily, &series.indicators, &series.flows)
        .iter()
        .map(record_enricher::enrich)
        .collect();

    Ok(StockHistory { basic, daily_data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_store::fixtures::{basic, daily, day, dec, flow, flow_all, indicator};
    use crate::services::memory_store::MemoryStore;
    use crate::services::series_fetcher::{AggregatedFlow, PerSymbolFlow, TimeSpan, DEFAULT_DAYS};

    fn store_with_gaps() -> MemoryStore {
        MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            daily: vec![
                daily("600000", day(1)),
                daily("600000", day(2)),
                daily("600000", day(3)),
            ],
            indicators: vec![
                indicator("600000", day(2), "10.2"),
                indicator("600000", day(3), "10.3"),
            ],
            flows: vec![flow("600000", day(1), "1.1"), flow("600000", day(3), "3.3")],
            ..Default::default()
        }
    }

    #[test]
    fn merges_partially_overlapping_series() {
        let store = store_with_gaps();

        let history = load_history(&store, "600000", DEFAULT_DAYS, &PerSymbolFlow).unwrap();

        assert_eq!(history.basic.symbol, "600000");
        let dates: Vec<_> = history.daily_data.iter().map(|d| d.trade_date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);

        let d1 = &history.daily_data[0];
        assert!(d1.indicators.ma5.is_none());
        assert_eq!(d1.flow.main_net, Some(dec("1.1")));

        let d2 = &history.daily_data[1];
        assert_eq!(d2.indicators.ma5, Some(dec("10.2")));
        assert!(d2.flow.main_net.is_none());

        let d3 = &history.daily_data[2];
        assert_eq!(d3.indicators.ma5, Some(dec("10.3")));
        assert_eq!(d3.flow.main_net, Some(dec("3.3")));
    }

    #[test]
    fn resolves_by_name_before_fetching() {
        let store = store_with_gaps();

        let history = load_history(&store, "浦发银行", DEFAULT_DAYS, &PerSymbolFlow).unwrap();

        assert_eq!(history.daily_data.len(), 3);
    }

    #[test]
    fn no_price_bars_means_empty_history() {
        let store = MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            indicators: vec![indicator("600000", day(1), "1")],
            flows: vec![flow("600000", day(1), "1")],
            ..Default::default()
        };

        let history = load_history(&store, "600000", DEFAULT_DAYS, &PerSymbolFlow).unwrap();

        assert!(history.daily_data.is_empty());
    }

    #[test]
    fn output_length_follows_fetched_bars() {
        let store = MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            daily: (1..=20).map(|d| daily("600000", day(d))).collect(),
            indicators: (1..=20).map(|d| indicator("600000", day(d), "1")).collect(),
            ..Default::default()
        };

        let history = load_history(&store, "600000", 5, &PerSymbolFlow).unwrap();

        let dates: Vec<_> = history.daily_data.iter().map(|d| d.trade_date).collect();
        assert_eq!(dates, (16..=20).map(day).collect::<Vec<_>>());
        assert!(history.daily_data.iter().all(|d| d.indicators.ma5.is_some()));
    }

    #[test]
    fn indicator_outside_window_is_not_attached() {
        // 指标最新一条比日线旧，窗口内只有部分日期匹配
        let store = MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            daily: (5..=7).map(|d| daily("600000", day(d))).collect(),
            indicators: vec![indicator("600000", day(4), "9"), indicator("600000", day(5), "5")],
            ..Default::default()
        };

        let history = load_history(&store, "600000", 3, &PerSymbolFlow).unwrap();

        let ma5: Vec<_> = history.daily_data.iter().map(|d| d.indicators.ma5.clone()).collect();
        assert_eq!(ma5, vec![Some(dec("5")), None, None]);
    }

    #[test]
    fn aggregated_variant_merges_selected_bucket() {
        let store = MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            daily: vec![daily("600000", day(1)), daily("600000", day(2))],
            flow_alls: vec![
                flow_all("600000", day(1), 3, "30"),
                flow_all("600000", day(2), 0, "2"),
            ],
            ..Default::default()
        };
        let source = AggregatedFlow {
            time_span: TimeSpan::ThreeDays,
        };

        let history = load_history(&store, "600000", DEFAULT_DAYS, &source).unwrap();

        assert_eq!(history.daily_data[0].flow.net_amount, Some(dec("30")));
        assert!(history.daily_data[1].flow.net_amount.is_none());
    }

    #[test]
    fn storage_failure_is_surfaced() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };

        let err = load_history(&store, "600000", DEFAULT_DAYS, &PerSymbolFlow).unwrap_err();

        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
