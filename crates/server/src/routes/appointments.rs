use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use service::appointments::{self, AppointmentInput};

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AppointmentInput>,
) -> Result<(StatusCode, Json<models::appointment::Model>), ApiError> {
    let created = appointments::create_appointment(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
