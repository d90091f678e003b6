use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use service::favorites;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct FavoriteInput {
    pub user_id: i32,
    pub service_id: i32,
}

/// Add a favorite; 201 when created, 200 when the pair already existed.
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<FavoriteInput>,
) -> Result<(StatusCode, Json<models::favorite_service::Model>), ApiError> {
    let (row, created) = favorites::add_favorite(&state.db, input.user_id, input.service_id).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(row)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    favorites::remove_favorite(&state.db, favorite_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<models::favorite_service::Model>>, ApiError> {
    let items = favorites::list_favorites(&state.db, user_id).await?;
    Ok(Json(items))
}
