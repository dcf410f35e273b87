use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

pub mod stock_basic_info;
pub mod stock_daily_data;
pub mod stock_indicator;
pub mod stock_money_flow;
pub mod stock_money_flow_all;
pub mod stock_overview;
pub mod user;
pub mod user_favorite;
pub mod user_rule;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

/// 转义 LIKE 模式中的通配符
pub(crate) fn like_contains(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
