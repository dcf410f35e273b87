//! 宽松的查询参数解析：非法输入回落到默认值，而不是返回 400。

use chrono::NaiveDate;
use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// 解析整数，空串、非数字、小数都返回 None
pub fn parse_lenient_i64(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).and_then(|s| s.parse::<i64>().ok())
}

/// 解析有限浮点数，NaN / inf 视为非法
pub fn parse_lenient_f64(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// YYYY-MM-DD
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

/// 原始分页参数，保持字符串形式以便宽松处理
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// page < 1 取 1；page_size 不在 1..=100 取 20
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = match parse_lenient_i64(page) {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let page_size = match parse_lenient_i64(page_size) {
            Some(s) if (1..=MAX_PAGE_SIZE).contains(&s) => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl From<&PageParams> for Pagination {
    fn from(params: &PageParams) -> Self {
        Self::from_raw(params.page.as_deref(), params.page_size.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date(" 2024-03-08 ").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert!(parse_date("2024/03/08").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn pagination_defaults_when_absent() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
    }

    #[test]
    fn out_of_range_page_size_resets_to_default() {
        for raw in ["0", "-1", "101", "5000", "ten", ""] {
            let p = Pagination::from_raw(Some("2"), Some(raw));
            assert_eq!(p.page_size, DEFAULT_PAGE_SIZE, "page_size={raw}");
            assert_eq!(p.page, 2);
        }
        assert_eq!(Pagination::from_raw(None, Some("100")).page_size, 100);
        assert_eq!(Pagination::from_raw(None, Some("1")).page_size, 1);
    }

    #[test]
    fn invalid_page_resets_to_first() {
        assert_eq!(Pagination::from_raw(Some("0"), None).page, 1);
        assert_eq!(Pagination::from_raw(Some("-4"), None).page, 1);
        assert_eq!(Pagination::from_raw(Some("1.5"), None).page, 1);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = Pagination::from_raw(Some("3"), Some("20"));
        assert_eq!(p.offset(), 40);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn lenient_float_rejects_non_finite() {
        assert_eq!(parse_lenient_f64(Some("2.5")), Some(2.5));
        assert_eq!(parse_lenient_f64(Some("NaN")), None);
        assert_eq!(parse_lenient_f64(Some("inf")), None);
        assert_eq!(parse_lenient_f64(Some("abc")), None);
    }
}
