use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::json;

use crate::services::ServiceError;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "bad request", "message": msg})),
            )
                .into_response(),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "unauthorized", "message": msg})),
            )
                .into_response(),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal server error"})),
            )
                .into_response(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::BadRequest(msg),
            ServiceError::NotFound => AppError::NotFound,
            ServiceError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                AppError::InternalServerError
            }
        }
    }
}

/// 仓储层错误映射：记录不存在 -> 404，唯一约束冲突 -> 400，其余 -> 500
pub fn map_db_err(err: DieselError) -> AppError {
    match err {
        DieselError::NotFound => AppError::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            AppError::BadRequest(info.message().to_string())
        }
        other => {
            tracing::error!("Database error: {}", other);
            AppError::InternalServerError
        }
    }
}

/// 取连接失败统一按 500 处理
pub fn pool_err(err: diesel::r2d2::PoolError) -> AppError {
    tracing::error!("Failed to get DB connection: {}", err);
    AppError::InternalServerError
}
