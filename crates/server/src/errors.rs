use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// HTTP edge of the service-layer error taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Service(err) = self;
        let (status, msg) = match err {
            ServiceError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ServiceError::Validation(m) => (StatusCode::BAD_REQUEST, m),
            ServiceError::Model(ModelError::Validation(m)) => (StatusCode::BAD_REQUEST, m),
            ServiceError::Model(ModelError::Db(m)) | ServiceError::Db(m) => {
                // Store failures are unrecoverable for the request; details
                // go to the log, not the client.
                error!(error = %m, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
