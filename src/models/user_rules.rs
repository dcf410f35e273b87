use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::schema::user_stock_rules;

/// 用户选股规则，rule_expression 原样存储，不做解释
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = user_stock_rules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserStockRule {
    pub id: i64,
    pub user_id: Uuid,
    pub rule_name: String,
    pub rule_expression: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_stock_rules)]
pub struct NewUserStockRule {
    pub user_id: Uuid,
    pub rule_name: String,
    pub rule_expression: Value,
}

#[derive(AsChangeset, Debug, Default, Clone)]
#[diesel(table_name = user_stock_rules)]
pub struct UpdateUserStockRule {
    pub rule_name: Option<String>,
    pub rule_expression: Option<Value>,
    pub updated_at: Option<DateTime<Utc>>,
}
