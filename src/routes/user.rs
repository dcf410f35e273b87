use axum::{routing::{delete, post, put}, Router};

use crate::app::AppState;
use crate::handler::user::{login, register};
use crate::handler::user_favorite::{add_favorite, delete_favorite, list_favorites};
use crate::handler::user_rule::{add_rule, delete_rule, list_rules, update_rule};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/favorites", post(add_favorite).get(list_favorites))
        .route("/favorites/:id", delete(delete_favorite))
        .route("/rules", post(add_rule).get(list_rules))
        .route("/rules/:id", put(update_rule).delete(delete_rule))
}
