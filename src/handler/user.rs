use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api_models::user::{AuthResponse, LoginRequest, RegisterRequest};
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::models::NewUser;
use crate::repositories::user;
use crate::services::password::{hash_password, verify_password, PasswordError};

const BAD_CREDENTIALS: &str = "invalid username or password";

/// 注册，用户名重复时 400
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest("username and password are required".to_string()));
    }
    let password_hash = hash_password(&payload.password).map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        AppError::InternalServerError
    })?;

    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_user = NewUser {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash,
        email: payload.email,
        phone: payload.phone,
    };
    let created = user::create(&mut conn, &new_user).map_err(map_db_err)?;
    tracing::info!("User registered: {}", created.username);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "register success".to_string(),
            user_id: created.id,
        }),
    ))
}

/// 登录，用户不存在与密码错误返回同样的 401
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let found = user::find_by_username(&mut conn, payload.username.trim())
        .map_err(map_db_err)?
        .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

    match verify_password(&payload.password, &found.password_hash) {
        Ok(()) => {}
        Err(PasswordError::VerificationFailed) => {
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }
        Err(e) => {
            tracing::error!("Stored password hash unusable for {}: {}", found.username, e);
            return Err(AppError::InternalServerError);
        }
    }

    Ok(Json(AuthResponse {
        message: "login success".to_string(),
        user_id: found.id,
    }))
}
