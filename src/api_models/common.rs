use serde::Serialize;

use crate::utils::query_params::Pagination;

/// 分页响应外壳
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub data: Vec<T>,
}

impl<T> PagedResponse<T> {
    pub fn new(pagination: Pagination, total: i64, data: Vec<T>) -> Self {
        Self {
            page: pagination.page,
            page_size: pagination.page_size,
            total,
            data,
        }
    }
}
