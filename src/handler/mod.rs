use chrono::NaiveDate;
use uuid::Uuid;

use crate::handler::error::AppError;
use crate::utils::query_params::parse_date;

pub mod error;
pub mod stock_basic_info;
pub mod stock_daily_data;
pub mod stock_history;
pub mod stock_indicator;
pub mod stock_money_flow;
pub mod stock_money_flow_all;
pub mod user;
pub mod user_favorite;
pub mod user_rule;

/// 可选日期参数，给了就必须是 YYYY-MM-DD
pub(crate) fn optional_date(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match raw.filter(|s| !s.trim().is_empty()) {
        Some(s) => parse_date(s)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {field}, expected YYYY-MM-DD"))),
        None => Ok(None),
    }
}

pub(crate) fn required_date(raw: Option<&str>, field: &str) -> Result<NaiveDate, AppError> {
    optional_date(raw, field)?.ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

pub(crate) fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest("user_id is required".to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid user_id".to_string()))
}
