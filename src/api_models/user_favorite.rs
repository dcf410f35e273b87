use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: String,
    pub symbol: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPageQuery {
    pub user_id: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub message: String,
    pub favorite_id: i64,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}
