use bigdecimal::BigDecimal;
use diesel::r2d2::PoolError;
use thiserror::Error;

use crate::app::DbPool;
use crate::models::{
    StockBasicInfo, StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll, StockOverview,
};
use crate::repositories::{
    stock_basic_info, stock_daily_data, stock_indicator, stock_money_flow, stock_money_flow_all,
    stock_overview,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),
}

/// 概览分页的过滤条件
#[derive(Debug, Clone, PartialEq)]
pub enum OverviewFilter {
    /// 全部，按代码升序
    All,
    /// change_percent 严格大于阈值，按涨幅倒序
    ChangeAbove(BigDecimal),
}

/// 历史对齐与查询层依赖的只读存储接口。
///
/// `recent_*` 返回某只股票最近 `limit` 条记录，按各自日期列倒序；
/// 三个序列互相独立，不保证日期集合一致。
pub trait StockStore: Send + Sync {
    fn find_by_symbol_or_name(&self, token: &str) -> Result<Option<StockBasicInfo>, StoreError>;

    fn search_basic_info(&self, keyword: &str, limit: i64) -> Result<Vec<StockBasicInfo>, StoreError>;

    fn recent_daily_data(&self, symbol: &str, limit: i64) -> Result<Vec<StockDailyData>, StoreError>;

    fn recent_indicators(&self, symbol: &str, limit: i64) -> Result<Vec<StockIndicator>, StoreError>;

    fn recent_money_flows(&self, symbol: &str, limit: i64) -> Result<Vec<StockMoneyFlow>, StoreError>;

    fn recent_money_flow_alls(
        &self,
        symbol: &str,
        time_span: i32,
        limit: i64,
    ) -> Result<Vec<StockMoneyFlowAll>, StoreError>;

    /// 返回 (当前页数据, 满足条件的总数)
    fn overview_page(
        &self,
        filter: &OverviewFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<StockOverview>, i64), StoreError>;
}

/// 基于 r2d2 连接池的 PostgreSQL 实现
#[derive(Clone)]
pub struct PgStockStore {
    pool: DbPool,
}

impl PgStockStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StockStore for PgStockStore {
    fn find_by_symbol_or_name(&self, token: &str) -> Result<Option<StockBasicInfo>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_basic_info::find_by_symbol_or_name(&mut conn, token)?)
    }

    fn search_basic_info(&self, keyword: &str, limit: i64) -> Result<Vec<StockBasicInfo>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_basic_info::search(&mut conn, keyword, limit)?)
    }

    fn recent_daily_data(&self, symbol: &str, limit: i64) -> Result<Vec<StockDailyData>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_daily_data::find_recent(&mut conn, symbol, limit)?)
    }

    fn recent_indicators(&self, symbol: &str, limit: i64) -> Result<Vec<StockIndicator>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_indicator::find_recent(&mut conn, symbol, limit)?)
    }

    fn recent_money_flows(&self, symbol: &str, limit: i64) -> Result<Vec<StockMoneyFlow>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_money_flow::find_recent(&mut conn, symbol, limit)?)
    }

    fn recent_money_flow_alls(
        &self,
        symbol: &str,
        time_span: i32,
        limit: i64,
    ) -> Result<Vec<StockMoneyFlowAll>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(stock_money_flow_all::find_recent(&mut conn, symbol, time_span, limit)?)
    }

    fn overview_page(
        &self,
        filter: &OverviewFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<StockOverview>, i64), StoreError> {
        let mut conn = self.pool.get()?;
        let page = match filter {
            OverviewFilter::All => stock_overview::list_page(&mut conn, offset, limit)?,
            OverviewFilter::ChangeAbove(threshold) => {
                stock_overview::hot_page(&mut conn, threshold, offset, limit)?
            }
        };
        Ok(page)
    }
}
