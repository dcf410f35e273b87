use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::stock_money_flow::{create_money_flow, get_money_flow_by_symbol};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_money_flow))
        .route("/symbol/:symbol", get(get_money_flow_by_symbol))
}
