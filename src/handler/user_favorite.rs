use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api_models::user_favorite::{AddFavoriteRequest, AddFavoriteResponse, FavoriteResponse, UserPageQuery};
use crate::api_models::PagedResponse;
use crate::app::AppState;
use crate::handler::error::{map_db_err, pool_err, AppError};
use crate::handler::parse_user_id;
use crate::models::{NewUserFavoriteStock, UserFavoriteStock};
use crate::repositories::user_favorite;
use crate::utils::query_params::Pagination;

impl From<UserFavoriteStock> for FavoriteResponse {
    fn from(fav: UserFavoriteStock) -> Self {
        Self {
            id: fav.id,
            user_id: fav.user_id,
            symbol: fav.symbol,
            created_at: fav.created_at,
        }
    }
}

/// 添加自选股，重复收藏时 400
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<AddFavoriteResponse>), AppError> {
    let owner = parse_user_id(&payload.user_id)?;
    let symbol = payload.symbol.trim();
    if symbol.is_empty() {
        return Err(AppError::BadRequest("symbol is required".to_string()));
    }
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let new_item = NewUserFavoriteStock {
        user_id: owner,
        symbol: symbol.to_string(),
    };
    let created = user_favorite::create(&mut conn, &new_item).map_err(map_db_err)?;
    Ok((
        StatusCode::CREATED,
        Json(AddFavoriteResponse {
            message: "favorite added".to_string(),
            favorite_id: created.id,
        }),
    ))
}

/// 某用户的自选股，最新在前
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserPageQuery>,
) -> Result<Json<PagedResponse<FavoriteResponse>>, AppError> {
    let owner = parse_user_id(query.user_id.as_deref().unwrap_or_default())?;
    let pagination = Pagination::from_raw(query.page.as_deref(), query.page_size.as_deref());
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let (rows, total) = user_favorite::page_by_user(&mut conn, owner, pagination.offset(), pagination.page_size)
        .map_err(map_db_err)?;
    let data = rows.into_iter().map(Into::into).collect();
    Ok(Json(PagedResponse::new(pagination, total, data)))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = state.db_pool.get().map_err(pool_err)?;
    let affected = user_favorite::delete_by_id(&mut conn, id).map_err(map_db_err)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
