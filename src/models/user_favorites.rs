use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::user_favorite_stocks;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = user_favorite_stocks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserFavoriteStock {
    pub id: i64,
    pub user_id: Uuid,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_favorite_stocks)]
pub struct NewUserFavoriteStock {
    pub user_id: Uuid,
    pub symbol: String,
}
