use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod admin;
pub mod appointments;
pub mod catalog;
pub mod favorites;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public catalog routes, booking and
/// favorites routes, and admin mutations.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/home", get(catalog::home))
        .route("/api/services", get(catalog::list_services))
        .route("/api/services/search", get(catalog::search))
        .route("/api/services/:service_id", get(catalog::service_detail))
        .route("/api/branches", get(catalog::branches))
        .route("/api/news", get(catalog::news))
        .route("/api/appointments", post(appointments::create))
        .route("/api/favorites", post(favorites::add))
        .route("/api/favorites/:favorite_id", axum::routing::delete(favorites::remove))
        .route("/api/users/:user_id/favorites", get(favorites::list_for_user));

    // Admin routes; non-matching methods are rejected with 405 by the router
    let admin_routes = Router::new()
        .route("/admin/services", post(admin::create_service))
        .route(
            "/admin/services/:service_id",
            put(admin::update_service).delete(admin::delete_service),
        )
        .route("/admin/listings", get(admin::listings));

    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
