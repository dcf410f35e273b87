use thiserror::Error;

use super::stock_store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// 必填参数缺失（空 symbol / 空关键字等）
    #[error("{0}")]
    Validation(String),
    #[error("stock not found")]
    NotFound,
    /// 底层查询失败，不重试，不做部分降级
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
