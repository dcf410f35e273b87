use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::stock_daily_data::{create_daily_data, get_daily_data_by_symbol, list_daily_data};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_daily_data).get(list_daily_data))
        .route("/:symbol", get(get_daily_data_by_symbol))
}
