use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddRuleRequest {
    pub user_id: String,
    pub rule_name: String,
    /// 任意 JSON 对象，后端不解释
    pub rule_expression: Value,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateRuleRequest {
    /// 为空字符串时不更新
    #[serde(default)]
    pub rule_name: String,
    pub rule_expression: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AddRuleResponse {
    pub message: String,
    pub rule_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RuleResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub rule_name: String,
    pub rule_expression: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UpdateRuleResponse {
    pub message: String,
    pub rule: RuleResponse,
}
