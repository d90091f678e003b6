use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use service::appointments::{self, BusyDay};
use service::catalog::{self, BranchStats, CategoryWithCount, PopularService};
use service::pagination::Pagination;
use service::services;
use service::statistics;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Serialize)]
pub struct HomeView {
    pub popular_services: Vec<PopularService>,
    pub categories: Vec<CategoryWithCount>,
    pub branch_stats: BranchStats,
    pub latest_news: Vec<models::news::Model>,
    pub nearest_branches: Vec<models::branch::Model>,
}

pub async fn home(State(state): State<AppState>) -> Result<Json<HomeView>, ApiError> {
    let popular_services = catalog::popular_services(&state.db, 5).await?;
    let categories = catalog::categories_with_counts(&state.db).await?;
    let branch_stats = catalog::branch_stats(&state.db).await?;
    let latest_news = catalog::latest_news(&state.db, 3).await?;
    let nearest_branches = catalog::list_branches(&state.db, Some(8)).await?;
    Ok(Json(HomeView {
        popular_services,
        categories,
        branch_stats,
        latest_news,
        nearest_branches,
    }))
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<models::service::Model>,
    /// Fallback suggestions when the search comes back empty
    pub popular_services: Vec<PopularService>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchView>, ApiError> {
    let results = catalog::search_services(&state.db, &params.q).await?;
    let popular_services = catalog::popular_services(&state.db, 3).await?;
    Ok(Json(SearchView { query: params.q, results, popular_services }))
}

#[derive(Serialize)]
pub struct ServiceDetailView {
    pub service: models::service::Model,
    pub busy_days: Vec<BusyDay>,
    pub stat: models::service_statistic::Model,
}

/// Service detail. Every fetch counts as a view and bumps the counter.
pub async fn service_detail(
    State(state): State<AppState>,
    Path(service_id): Path<i32>,
) -> Result<Json<ServiceDetailView>, ApiError> {
    let service = services::get_service(&state.db, service_id).await?;
    let busy_days = appointments::busy_days(&state.db, service_id).await?;
    let stat = statistics::record_view(&state.db, service_id).await?;
    Ok(Json(ServiceDetailView { service, busy_days, stat }))
}

#[derive(Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PageParams {
    fn pagination(&self) -> Pagination {
        let d = Pagination::default();
        Pagination {
            page: self.page.unwrap_or(d.page),
            per_page: self.per_page.unwrap_or(d.per_page),
        }
    }
}

pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<models::service::Model>>, ApiError> {
    let items = services::list_services(&state.db, params.pagination()).await?;
    Ok(Json(items))
}

pub async fn branches(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::branch::Model>>, ApiError> {
    let items = catalog::list_branches(&state.db, None).await?;
    Ok(Json(items))
}

#[derive(Deserialize)]
pub struct NewsParams {
    #[serde(default = "default_news_limit")]
    pub limit: u64,
}

fn default_news_limit() -> u64 {
    20
}

pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<NewsParams>,
) -> Result<Json<Vec<models::news::Model>>, ApiError> {
    let items = catalog::latest_news(&state.db, params.limit).await?;
    Ok(Json(items))
}
