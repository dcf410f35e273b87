use diesel::prelude::*;
use uuid::Uuid;

use super::PgPoolConn;
use crate::models::{NewUserFavoriteStock, UserFavoriteStock};
use crate::schema::user_favorite_stocks::dsl::*;

pub fn create(
    conn: &mut PgPoolConn,
    new_item: &NewUserFavoriteStock,
) -> Result<UserFavoriteStock, diesel::result::Error> {
    diesel::insert_into(user_favorite_stocks)
        .values(new_item)
        .returning(UserFavoriteStock::as_returning())
        .get_result(conn)
}

/// 某用户的收藏，最新在前
pub fn page_by_user(
    conn: &mut PgPoolConn,
    owner: Uuid,
    offset: i64,
    limit: i64,
) -> Result<(Vec<UserFavoriteStock>, i64), diesel::result::Error> {
    let total = user_favorite_stocks
        .filter(user_id.eq(owner))
        .count()
        .get_result::<i64>(conn)?;
    let rows = user_favorite_stocks
        .filter(user_id.eq(owner))
        .order(created_at.desc())
        .offset(offset)
        .limit(limit)
        .select(UserFavoriteStock::as_select())
        .load(conn)?;
    Ok((rows, total))
}

pub fn delete_by_id(conn: &mut PgPoolConn, favorite_id: i64) -> Result<usize, diesel::result::Error> {
    diesel::delete(user_favorite_stocks.find(favorite_id)).execute(conn)
}
