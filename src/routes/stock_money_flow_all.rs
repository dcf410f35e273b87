use axum::{routing::{get, post}, Router};

use crate::app::AppState;
use crate::handler::stock_money_flow_all::{
    create_money_flow_all, delete_money_flow_all, get_money_flow_all, get_money_flow_all_by_symbol,
    list_money_flow_alls, update_money_flow_all,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_money_flow_all).get(list_money_flow_alls))
        .route("/symbol/:symbol", get(get_money_flow_all_by_symbol))
        .route(
            "/:id",
            get(get_money_flow_all).put(update_money_flow_all).delete(delete_money_flow_all),
        )
}
