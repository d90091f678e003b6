//! Read-only catalog projections: popularity ranking, category counts,
//! search and the home-page aggregates. No side effects in this module.

use rust_decimal::Decimal;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;

use models::{appointment, branch, category, news, service};

use crate::errors::ServiceError;

/// Service ranked by how many appointments reference it.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct PopularService {
    pub service_id: i32,
    pub name: String,
    pub appointment_count: i64,
}

/// Category with a strictly positive number of services.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct CategoryWithCount {
    pub category_id: i32,
    pub name: String,
    pub service_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchStats {
    pub total_branches: u64,
    pub total_services: u64,
    pub total_appointments: u64,
}

/// Rank services by appointment count, descending. Ties are broken by
/// ascending service id to keep the order stable across runs.
pub async fn popular_services(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<PopularService>, ServiceError> {
    service::Entity::find()
        .select_only()
        .column(service::Column::ServiceId)
        .column(service::Column::Name)
        .column_as(appointment::Column::AppointmentId.count(), "appointment_count")
        .left_join(appointment::Entity)
        .group_by(service::Column::ServiceId)
        .group_by(service::Column::Name)
        .order_by(appointment::Column::AppointmentId.count(), Order::Desc)
        .order_by(service::Column::ServiceId, Order::Asc)
        .limit(limit)
        .into_model::<PopularService>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Every category with its service count; categories without services are
/// dropped by the inner join.
pub async fn categories_with_counts(
    db: &DatabaseConnection,
) -> Result<Vec<CategoryWithCount>, ServiceError> {
    category::Entity::find()
        .select_only()
        .column(category::Column::CategoryId)
        .column(category::Column::Name)
        .column_as(service::Column::ServiceId.count(), "service_count")
        .inner_join(service::Entity)
        .group_by(category::Column::CategoryId)
        .group_by(category::Column::Name)
        .order_by(category::Column::CategoryId, Order::Asc)
        .into_model::<CategoryWithCount>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Escape LIKE metacharacters so the query only matches literally.
/// `q=100%` must match "100%" in a description, not every "100".
fn escape_like_pattern(query: &str) -> String {
    query.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Case-insensitive substring search over name and description.
///
/// A blank query yields an empty result set, never the full catalog.
/// Services with a state duty above [`service::SEARCH_DUTY_LIMIT`] are
/// excluded regardless of match.
pub async fn search_services(
    db: &DatabaseConnection,
    query: &str,
) -> Result<Vec<service::Model>, ServiceError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = format!("%{}%", escape_like_pattern(query));
    service::Entity::find()
        .filter(
            Condition::any()
                .add(Expr::col((service::Entity, service::Column::Name)).ilike(pattern.as_str()))
                .add(
                    Expr::col((service::Entity, service::Column::Description))
                        .ilike(pattern.as_str()),
                ),
        )
        .filter(service::Column::StateDuty.lte(Decimal::from(service::SEARCH_DUTY_LIMIT)))
        .distinct()
        .order_by(service::Column::Name, Order::Asc)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn latest_news(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<news::Model>, ServiceError> {
    news::Entity::find()
        .order_by(news::Column::CreatedAt, Order::Desc)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn list_branches(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<branch::Model>, ServiceError> {
    let mut query = branch::Entity::find().order_by(branch::Column::BranchId, Order::Asc);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn branch_stats(db: &DatabaseConnection) -> Result<BranchStats, ServiceError> {
    let total_branches = branch::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let total_services = service::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let total_appointments = appointment::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(BranchStats { total_branches, total_services, total_appointments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::{self, AppointmentInput};
    use crate::services::{self, ServiceInput};
    use crate::test_support::{get_db, sample_user};
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    #[tokio::test]
    async fn blank_query_returns_empty_without_touching_store() -> Result<()> {
        // Disconnected store: the early return must fire before any query
        let db = DatabaseConnection::default();
        assert!(search_services(&db, "").await?.is_empty());
        assert!(search_services(&db, "   ").await?.is_empty());
        Ok(())
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("c:\\dir"), "c:\\\\dir");
        assert_eq!(escape_like_pattern("паспорт"), "паспорт");
    }

    #[tokio::test]
    async fn search_treats_wildcards_as_literal_text() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        let marker = Uuid::new_v4().simple().to_string();
        let with_percent = services::create_service(
            &db,
            ServiceInput {
                name: format!("Скидка {marker}"),
                category_id: None,
                description: Some(format!("Возврат {marker} 100% пошлины")),
                state_duty: Default::default(),
            },
        )
        .await?;
        let without_percent = services::create_service(
            &db,
            ServiceInput {
                name: format!("Справка {marker}"),
                category_id: None,
                description: Some(format!("Выдача {marker} за 100 рублей")),
                state_duty: Default::default(),
            },
        )
        .await?;

        // "100%" must only match the literal occurrence
        let hits = search_services(&db, &format!("{marker} 100%")).await?;
        assert!(hits.iter().any(|m| m.service_id == with_percent.service_id));
        assert!(!hits.iter().any(|m| m.service_id == without_percent.service_id));

        // a bare wildcard only matches literal percent signs, never everything
        let hits = search_services(&db, "%").await?;
        assert!(hits.iter().any(|m| m.service_id == with_percent.service_id));
        assert!(!hits.iter().any(|m| m.service_id == without_percent.service_id));

        services::delete_service(&db, with_percent.service_id).await?;
        services::delete_service(&db, without_percent.service_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn popularity_is_monotone_in_appointment_count() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let user = sample_user(&db).await?;

        let tag = Uuid::new_v4();
        let mut ids = Vec::new();
        for (i, bookings) in [(0u32, 2usize), (1, 0), (2, 3)] {
            let s = services::create_service(
                &db,
                ServiceInput {
                    name: format!("Популярная услуга {i} {tag}"),
                    category_id: None,
                    description: None,
                    state_duty: Default::default(),
                },
            )
            .await?;
            for day in 0..bookings {
                appointments::create_appointment(
                    &db,
                    AppointmentInput {
                        user_id: user.user_id,
                        service_id: Some(s.service_id),
                        branch_id: None,
                        status_id: None,
                        desired_date: NaiveDate::from_ymd_opt(2026, 9, 1 + day as u32).unwrap(),
                        desired_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    },
                )
                .await?;
            }
            ids.push(s.service_id);
        }

        let ranked = popular_services(&db, 1000).await?;
        let counts: Vec<i64> = ranked.iter().map(|p| p.appointment_count).collect();
        let mut sorted = counts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted, "ranking must be descending by appointment count");

        let pos = |id: i32| ranked.iter().position(|p| p.service_id == id).unwrap();
        assert!(pos(ids[2]) < pos(ids[0]));
        assert!(pos(ids[0]) < pos(ids[1]));

        for id in ids {
            services::delete_service(&db, id).await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn category_listing_never_contains_empty_categories() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        let empty = models::category::find_or_create(&db, &format!("Пустая {}", Uuid::new_v4()))
            .await?;
        let filled = models::category::find_or_create(&db, &format!("Занятая {}", Uuid::new_v4()))
            .await?;
        let svc = services::create_service(
            &db,
            ServiceInput {
                name: format!("Услуга в категории {}", Uuid::new_v4()),
                category_id: Some(filled.category_id),
                description: None,
                state_duty: Default::default(),
            },
        )
        .await?;

        let listing = categories_with_counts(&db).await?;
        assert!(listing.iter().all(|c| c.service_count > 0));
        assert!(listing.iter().any(|c| c.category_id == filled.category_id));
        assert!(!listing.iter().any(|c| c.category_id == empty.category_id));

        services::delete_service(&db, svc.service_id).await?;
        models::category::Entity::delete_by_id(empty.category_id).exec(&db).await?;
        models::category::Entity::delete_by_id(filled.category_id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_substring_and_respects_duty_threshold() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        let marker = Uuid::new_v4().simple().to_string();
        let name = format!("Замена паспорта {marker}");
        let s = services::create_service(
            &db,
            ServiceInput {
                name: name.clone(),
                category_id: None,
                description: Some("Замена паспорта РФ при достижении 20 и 45 лет".into()),
                state_duty: Decimal::from(300),
            },
        )
        .await?;

        // Case-insensitive match on the marker substring
        let hits = search_services(&db, &marker.to_uppercase()).await?;
        assert!(hits.iter().any(|m| m.service_id == s.service_id));
        for hit in &hits {
            let hay = format!("{} {}", hit.name, hit.description.clone().unwrap_or_default())
                .to_lowercase();
            assert!(hay.contains(&marker.to_lowercase()));
            assert!(hit.state_duty <= Decimal::from(service::SEARCH_DUTY_LIMIT));
        }

        // Raising the duty past the threshold hides the service
        services::update_service(
            &db,
            s.service_id,
            ServiceInput {
                name: name.clone(),
                category_id: None,
                description: s.description.clone(),
                state_duty: Decimal::from(6000),
            },
        )
        .await?;
        let hits = search_services(&db, &marker).await?;
        assert!(!hits.iter().any(|m| m.service_id == s.service_id));

        services::delete_service(&db, s.service_id).await?;
        Ok(())
    }
}
