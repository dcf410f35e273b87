use diesel::prelude::*;
use uuid::Uuid;

use super::PgPoolConn;
use crate::models::{NewUserStockRule, UpdateUserStockRule, UserStockRule};
use crate::schema::user_stock_rules::dsl::*;

pub fn create(conn: &mut PgPoolConn, new_rule: &NewUserStockRule) -> Result<UserStockRule, diesel::result::Error> {
    diesel::insert_into(user_stock_rules)
        .values(new_rule)
        .returning(UserStockRule::as_returning())
        .get_result(conn)
}

pub fn page_by_user(
    conn: &mut PgPoolConn,
    owner: Uuid,
    offset: i64,
    limit: i64,
) -> Result<(Vec<UserStockRule>, i64), diesel::result::Error> {
    let total = user_stock_rules
        .filter(user_id.eq(owner))
        .count()
        .get_result::<i64>(conn)?;
    let rows = user_stock_rules
        .filter(user_id.eq(owner))
        .order(created_at.desc())
        .offset(offset)
        .limit(limit)
        .select(UserStockRule::as_select())
        .load(conn)?;
    Ok((rows, total))
}

pub fn update_by_id(
    conn: &mut PgPoolConn,
    rule_id: i64,
    update_data: &UpdateUserStockRule,
) -> Result<UserStockRule, diesel::result::Error> {
    diesel::update(user_stock_rules.find(rule_id))
        .set(update_data)
        .returning(UserStockRule::as_returning())
        .get_result(conn)
}

pub fn delete_by_id(conn: &mut PgPoolConn, rule_id: i64) -> Result<usize, diesel::result::Error> {
    diesel::delete(user_stock_rules.find(rule_id)).execute(conn)
}
