use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::stock_basic_info::{create_stock, get_stock, get_stock_by_symbol, update_stock};
use crate::handler::stock_history::{
    get_stock_history, get_stock_history_all, get_stock_info, list_hot_stocks, list_stocks, search_stocks,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_stock))
        .route("/history", get(get_stock_history))
        .route("/history/all", get(get_stock_history_all))
        .route("/info", get(get_stock_info))
        .route("/list", get(list_stocks))
        .route("/hot", get(list_hot_stocks))
        .route("/search", get(search_stocks))
        .route("/symbol/:symbol", get(get_stock_by_symbol))
        .route("/:id", get(get_stock).put(update_stock))
}
