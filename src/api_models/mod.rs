pub mod common;
pub mod stock_basic_info;
pub mod stock_daily_data;
pub mod stock_history;
pub mod stock_indicator;
pub mod stock_money_flow;
pub mod stock_money_flow_all;
pub mod user;
pub mod user_favorite;
pub mod user_rule;

pub use common::PagedResponse;
