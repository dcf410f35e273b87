use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::stock_indicator::{
    create_indicator, get_indicator, get_indicator_by_symbol, list_indicators, update_indicator,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_indicator).get(list_indicators))
        .route("/symbol/:symbol", get(get_indicator_by_symbol))
        .route("/:id", get(get_indicator).put(update_indicator))
}
