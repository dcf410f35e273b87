use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;

use crate::api_models::user_favorite::UserPageQuery;
use crate::api_models::user_rule::{AddRuleRequest, AddRuleResponse, RuleResponse, UpdateRuleRequest, UpdateRuleResponse};
use crate::api_models::PagedResponse;
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::parse_user_id;
use crate::models::{NewUserStockRule, UpdateUserStockRule, UserStockRule};
use crate::repositories::user_rule;
use crate::utils::query_params::Pagination;

impl From<UserStockRule> for RuleResponse {
    fn from(rule: UserStockRule) -> Self {
        Self {
            id: rule.id,
            user_id: rule.user_id,
            rule_name: rule.rule_name,
            rule_expression: rule.rule_expression,
            created_at: rule.created_at,
            updated_at: rule.updated_at,
        }
    }
}

/// 规则表达式原样存储，只要求是 JSON 对象
fn check_expression(expr: &Value) -> Result<(), AppError> {
    if expr.is_object() {
        Ok(())
    } else {
        Err(AppError::BadRequest("rule_expression must be a JSON object".to_string()))
    }
}

pub async fn add_rule(
    State(state): State<AppState>,
    Json(payload): Json<AddRuleRequest>,
) -> Result<(StatusCode, Json<AddRuleResponse>), AppError> {
    let owner = parse_user_id(&payload.user_id)?;
    if payload.rule_name.trim().is_empty() {
        return Err(AppError::BadRequest("rule_name is required".to_string()));
    }
    check_expression(&payload.rule_expression)?;

    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_rule = NewUserStockRule {
        user_id: owner,
        rule_name: payload.rule_name,
        rule_expression: payload.rule_expression,
    };
    let created = user_rule::create(&mut conn, &new_rule).map_err(map_db_err)?;
    Ok((
        StatusCode::CREATED,
        Json(AddRuleResponse {
            message: "rule added".to_string(),
            rule_id: created.id,
        }),
    ))
}

/// 某用户的规则，最新在前
pub async fn list_rules(
    State(state): State<AppState>,
    Query(query): Query<UserPageQuery>,
) -> Result<Json<PagedResponse<RuleResponse>>, AppError> {
    let owner = parse_user_id(query.user_id.as_deref().unwrap_or_default())?;
    let pagination = Pagination::from_raw(query.page.as_deref(), query.page_size.as_deref());
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let (rows, total) = user_rule::page_by_user(&mut conn, owner, pagination.offset(), pagination.page_size)
        .map_err(map_db_err)?;
    let data = rows.into_iter().map(Into::into).collect();
    Ok(Json(PagedResponse::new(pagination, total, data)))
}

/// 名称为空、表达式缺省时保留原值
pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRuleRequest>,
) -> Result<Json<UpdateRuleResponse>, AppError> {
    if let Some(expr) = &payload.rule_expression {
        check_expression(expr)?;
    }
    let rule_name = Some(payload.rule_name.trim().to_string()).filter(|n| !n.is_empty());

    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let update_data = UpdateUserStockRule {
        rule_name,
        rule_expression: payload.rule_expression,
        updated_at: Some(Utc::now()),
    };
    let updated = user_rule::update_by_id(&mut conn, id, &update_data).map_err(map_db_err)?;
    Ok(Json(UpdateRuleResponse {
        message: "rule updated".to_string(),
        rule: updated.into(),
    }))
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let affected = user_rule::delete_by_id(&mut conn, id).map_err(map_db_err)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::check_expression;
    use crate::app::test_app;
    use crate::services::memory_store::MemoryStore;

    #[test]
    fn expression_must_be_object() {
        assert!(check_expression(&json!({"field": "pe_ttm", "op": "<", "value": 10})).is_ok());
        assert!(check_expression(&json!([1, 2])).is_err());
        assert!(check_expression(&json!("pe < 10")).is_err());
    }

    // 以下请求都在取数据库连接之前被拒绝
    #[tokio::test]
    async fn listing_without_user_id_is_400() {
        let resp = test_app(MemoryStore::default())
            .oneshot(Request::builder().uri("/api/v1/user/rules").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_uuid_is_400() {
        let resp = test_app(MemoryStore::default())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/user/favorites?user_id=not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_object_expression_is_400() {
        let body = json!({
            "user_id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "rule_name": "低估值",
            "rule_expression": [1, 2, 3],
        });
        let resp = test_app(MemoryStore::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/user/rules")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
