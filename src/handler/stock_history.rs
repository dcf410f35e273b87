use axum::{
    extract::{Query, State},
    Json,
};

use crate::api_models::stock_basic_info::StockBasicInfoResponse;
use crate::api_models::stock_history::{
    HistoryQuery, HotQuery, HotStocksResponse, SearchQuery, StockHistoryResponse, StockOverviewResponse,
    StockSearchItem, SymbolQuery,
};
use crate::api_models::PagedResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::{StockBasicInfo, StockOverview};
use crate::services::record_enricher::{AggregatedFlowFields, MoneyFlowFields};
use crate::services::series_fetcher::{normalize_days, AggregatedFlow, PerSymbolFlow, TimeSpan};
use crate::services::stock_history::{load_history, StockHistory};
use crate::services::stock_lookup;
use crate::utils::query_params::{PageParams, Pagination};

impl From<StockOverview> for StockOverviewResponse {
    fn from(row: StockOverview) -> Self {
        Self {
            symbol: row.symbol,
            name: row.name,
            trade_date: row.trade_date,
            open: row.open,
            close: row.close,
            high: row.high,
            low: row.low,
            volume: row.volume,
            turnover_rate: row.turnover_rate,
            change_percent: row.change_percent,
            in_amount: row.inflow_amount,
            out_amount: row.outflow_amount,
            net_amount: row.net_amount,
            turnover: row.turnover,
        }
    }
}

impl From<StockBasicInfo> for StockSearchItem {
    fn from(stock: StockBasicInfo) -> Self {
        Self {
            symbol: stock.symbol,
            name: stock.name,
            industry: stock.industry,
            market: stock.market,
        }
    }
}

fn history_response<F>(history: StockHistory<F>, time_span: Option<i32>) -> StockHistoryResponse<F> {
    let basic = history.basic;
    StockHistoryResponse {
        symbol: basic.symbol,
        name: basic.name,
        industry: basic.industry,
        market: basic.market,
        listing_date: basic.listing_date,
        time_span,
        daily_data: history.daily_data,
    }
}

/// 最近 N 日行情 + 技术指标 + 个股资金流
pub async fn get_stock_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<StockHistoryResponse<MoneyFlowFields>>, AppError> {
    let token = query.symbol.unwrap_or_default();
    let days = normalize_days(query.days.as_deref());
    let history = load_history(state.stock_store.as_ref(), &token, days, &PerSymbolFlow)?;
    Ok(Json(history_response(history, None)))
}

/// 最近 N 日行情 + 技术指标 + 指定时间跨度的全市场资金流
pub async fn get_stock_history_all(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<StockHistoryResponse<AggregatedFlowFields>>, AppError> {
    let token = query.symbol.unwrap_or_default();
    let days = normalize_days(query.days.as_deref());
    let source = AggregatedFlow {
        time_span: TimeSpan::from_raw(query.time_span.as_deref()),
    };
    let history = load_history(state.stock_store.as_ref(), &token, days, &source)?;
    Ok(Json(history_response(history, Some(source.time_span.code()))))
}

/// 按代码或名称查询基础信息
pub async fn get_stock_info(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<StockBasicInfoResponse>, AppError> {
    let token = query.symbol.unwrap_or_default();
    let found = stock_lookup::resolve(state.stock_store.as_ref(), &token)?;
    Ok(Json(found.into()))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PagedResponse<StockOverviewResponse>>, AppError> {
    let page = stock_lookup::list(state.stock_store.as_ref(), Pagination::from(&params))?;
    let data = page.data.into_iter().map(Into::into).collect();
    Ok(Json(PagedResponse::new(page.pagination, page.total, data)))
}

/// 涨幅超过阈值的股票
pub async fn list_hot_stocks(
    State(state): State<AppState>,
    Query(query): Query<HotQuery>,
) -> Result<Json<HotStocksResponse>, AppError> {
    let pagination = Pagination::from_raw(query.page.as_deref(), query.page_size.as_deref());
    let threshold = stock_lookup::normalize_threshold(query.threshold.as_deref());
    let page = stock_lookup::hot(state.stock_store.as_ref(), pagination, threshold)?;
    Ok(Json(HotStocksResponse {
        page: page.pagination.page,
        page_size: page.pagination.page_size,
        threshold,
        total: page.total,
        data: page.data.into_iter().map(Into::into).collect(),
    }))
}

/// 代码或名称子串联想；q 先去掉首尾空白再匹配，去空白后为空时 400
pub async fn search_stocks(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<StockSearchItem>>, AppError> {
    let keyword = query.q.unwrap_or_default();
    let found = stock_lookup::search(state.stock_store.as_ref(), keyword.trim())?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::test_app;
    use crate::services::memory_store::fixtures::{basic, daily, day, flow, flow_all, indicator, overview};
    use crate::services::memory_store::MemoryStore;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore {
            basics: vec![basic("600000", "浦发银行")],
            daily: vec![
                daily("600000", day(3)),
                daily("600000", day(1)),
                daily("600000", day(2)),
            ],
            indicators: vec![
                indicator("600000", day(2), "10.2"),
                indicator("600000", day(3), "10.3"),
            ],
            flows: vec![flow("600000", day(1), "1.1"), flow("600000", day(3), "3.3")],
            flow_alls: vec![flow_all("600000", day(2), 5, "50")],
            overviews: vec![
                overview("600000", "浦发银行", "5.0"),
                overview("000001", "平安银行", "7.5"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn history_is_ascending_with_null_gaps() {
        let (status, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/history?symbol=600000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["symbol"], "600000");
        assert_eq!(body["name"], "浦发银行");
        assert!(body.get("time_span").is_none());

        let days = body["daily_data"].as_array().unwrap();
        let dates: Vec<&str> = days.iter().map(|d| d["trade_date"].as_str().unwrap()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

        assert!(days[0]["ma5"].is_null());
        assert_eq!(days[0]["main_net"], "1.1");
        assert_eq!(days[1]["ma5"], "10.2");
        assert!(days[1]["main_net"].is_null());
        assert!(days[2]["rsi24"].is_null());
    }

    #[tokio::test]
    async fn malformed_days_falls_back_to_default() {
        let (status, body) = get_json(
            test_app(seeded_store()),
            "/api/v1/stocks/history?symbol=600000&days=abc",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["daily_data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn history_requires_symbol_and_known_stock() {
        let (status, _) = get_json(test_app(seeded_store()), "/api/v1/stocks/history").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(test_app(seeded_store()), "/api/v1/stocks/history?symbol=999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_failure_is_500() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };

        let (status, _) = get_json(test_app(store), "/api/v1/stocks/history?symbol=600000").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn aggregated_history_echoes_time_span() {
        let (status, body) = get_json(
            test_app(seeded_store()),
            "/api/v1/stocks/history/all?symbol=%E6%B5%A6%E5%8F%91%E9%93%B6%E8%A1%8C&time_span=5",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["time_span"], 5);
        let days = body["daily_data"].as_array().unwrap();
        assert_eq!(days[1]["net_amount"], "50");
        assert!(days[0]["in_amount"].is_null());
        assert!(days[0].get("main_net").is_none());
    }

    #[tokio::test]
    async fn unknown_time_span_means_today() {
        let (_, body) = get_json(
            test_app(seeded_store()),
            "/api/v1/stocks/history/all?symbol=600000&time_span=7",
        )
        .await;

        assert_eq!(body["time_span"], 0);
    }

    #[tokio::test]
    async fn hot_list_echoes_default_threshold() {
        let (status, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/hot").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["threshold"], 5.0);
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["symbol"], "000001");
    }

    #[tokio::test]
    async fn list_clamps_page_size() {
        let (_, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/list?page=0&page_size=500").await;

        assert_eq!(body["page"], 1);
        assert_eq!(body["page_size"], 20);
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][0]["symbol"], "000001");
    }

    #[tokio::test]
    async fn info_and_search() {
        let (status, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/info?symbol=600000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "浦发银行");

        let (status, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/search?q=6000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = get_json(test_app(seeded_store()), "/api/v1/stocks/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(test_app(seeded_store()), "/api/v1/stocks/search?q=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_keyword_is_trimmed() {
        let (status, body) = get_json(test_app(seeded_store()), "/api/v1/stocks/search?q=%206000%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["symbol"], "600000");
    }
}
