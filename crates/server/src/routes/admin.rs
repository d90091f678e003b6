use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use service::services::{self, ServiceInput};

use crate::errors::ApiError;
use crate::listings::{ListingConfig, LISTINGS};
use crate::routes::AppState;

pub async fn create_service(
    State(state): State<AppState>,
    Json(input): Json<ServiceInput>,
) -> Result<(StatusCode, Json<models::service::Model>), ApiError> {
    let created = services::create_service(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<i32>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<models::service::Model>, ApiError> {
    let updated = services::update_service(&state.db, service_id, input).await?;
    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    services::delete_service(&state.db, service_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn listings() -> Json<&'static [ListingConfig]> {
    Json(LISTINGS)
}
