use crate::models::{StockBasicInfo, StockOverview};
use crate::utils::bigdecimal_parser::f64_to_bigdecimal;
use crate::utils::query_params::{parse_lenient_f64, Pagination};

use super::error::ServiceError;
use super::stock_store::{OverviewFilter, StockStore};

pub const DEFAULT_HOT_THRESHOLD: f64 = 5.0;
pub const SEARCH_LIMIT: i64 = 10;

/// 分页结果
#[derive(Debug)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub total: i64,
    pub data: Vec<T>,
}

/// 阈值缺省、非法或 <= 0 时取 5
pub fn normalize_threshold(raw: Option<&str>) -> f64 {
    match parse_lenient_f64(raw) {
        Some(v) if v > 0.0 => v,
        _ => DEFAULT_HOT_THRESHOLD,
    }
}

/// 按代码或名称精确解析出股票，token 先去掉首尾空白
pub fn resolve(store: &dyn StockStore, token: &str) -> Result<StockBasicInfo, ServiceError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ServiceError::Validation("symbol required".to_string()));
    }
    store
        .find_by_symbol_or_name(token)?
        .ok_or(ServiceError::NotFound)
}

pub fn list(store: &dyn StockStore, pagination: Pagination) -> Result<Page<StockOverview>, ServiceError> {
    let (data, total) = store.overview_page(
        &OverviewFilter::All,
        pagination.offset(),
        pagination.page_size,
    )?;
    Ok(Page {
        pagination,
        total,
        data,
    })
}

/// 涨幅严格大于 threshold 的股票
pub fn hot(
    store: &dyn StockStore,
    pagination: Pagination,
    threshold: f64,
) -> Result<Page<StockOverview>, ServiceError> {
    let filter = OverviewFilter::ChangeAbove(f64_to_bigdecimal(threshold));
    let (data, total) = store.overview_page(&filter, pagination.offset(), pagination.page_size)?;
    Ok(Page {
        pagination,
        total,
        data,
    })
}

/// 代码或名称子串匹配，最多 10 条，不做相关性排序
pub fn search(store: &dyn StockStore, keyword: &str) -> Result<Vec<StockBasicInfo>, ServiceError> {
    if keyword.is_empty() {
        return Err(ServiceError::Validation("q required".to_string()));
    }
    Ok(store.search_basic_info(keyword, SEARCH_LIMIT)?)
}
