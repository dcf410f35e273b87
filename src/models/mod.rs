pub mod stock_basic_info;
pub mod stock_daily_data;
pub mod stock_indicators;
pub mod stock_money_flow;
pub mod stock_money_flow_all;
pub mod stock_overview;
pub mod users;
pub mod user_favorites;
pub mod user_rules;

pub use stock_basic_info::{NewStockBasicInfo, StockBasicInfo, UpdateStockBasicInfo};
pub use stock_daily_data::{NewStockDailyData, StockDailyData};
pub use stock_indicators::{NewStockIndicator, StockIndicator, UpdateStockIndicator};
pub use stock_money_flow::{NewStockMoneyFlow, StockMoneyFlow};
pub use stock_money_flow_all::{NewStockMoneyFlowAll, StockMoneyFlowAll, UpdateStockMoneyFlowAll};
pub use stock_overview::StockOverview;
pub use users::{NewUser, User};
pub use user_favorites::{NewUserFavoriteStock, UserFavoriteStock};
pub use user_rules::{NewUserStockRule, UpdateUserStockRule, UserStockRule};
