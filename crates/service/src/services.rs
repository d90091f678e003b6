//! Admin mutations for the service catalog. Create/update validate through
//! the models crate; delete removes the statistic rows before the service
//! row so no statistic can outlive its owner.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use tracing::info;

use models::{category, service, service_statistic};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::statistics;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state_duty: Decimal,
}

async fn validate(db: &DatabaseConnection, input: &ServiceInput) -> Result<(), ServiceError> {
    service::validate_name(&input.name)?;
    service::validate_state_duty(input.state_duty)?;
    if let Some(category_id) = input.category_id {
        let exists = category::Entity::find_by_id(category_id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .is_some();
        if !exists {
            return Err(ServiceError::Validation(format!("unknown category {}", category_id)));
        }
    }
    Ok(())
}

pub async fn get_service(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<service::Model, ServiceError> {
    service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))
}

pub async fn list_services(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Vec<service::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    service::Entity::find()
        .order_by(service::Column::ServiceId, Order::Asc)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Persist a new service, then seed its statistic row with zero counts.
///
/// The two writes are deliberately separate, not a transaction: a crash in
/// between leaves a service without a statistic row, which the view counter
/// repairs lazily on first read.
pub async fn create_service(
    db: &DatabaseConnection,
    input: ServiceInput,
) -> Result<service::Model, ServiceError> {
    validate(db, &input).await?;
    let am = service::ActiveModel {
        category_id: Set(input.category_id),
        name: Set(input.name.clone()),
        description: Set(input.description),
        state_duty: Set(input.state_duty),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    statistics::init_zeroed(db, created.service_id).await?;
    info!(service_id = created.service_id, name = %created.name, "service created");
    Ok(created)
}

/// Update fields in place. Statistics are never touched by updates.
pub async fn update_service(
    db: &DatabaseConnection,
    service_id: i32,
    input: ServiceInput,
) -> Result<service::Model, ServiceError> {
    validate(db, &input).await?;
    let mut am: service::ActiveModel = service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?
        .into();
    am.name = Set(input.name);
    am.category_id = Set(input.category_id);
    am.description = Set(input.description);
    am.state_duty = Set(input.state_duty);
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(service_id = updated.service_id, name = %updated.name, "service updated");
    Ok(updated)
}

/// Delete a service. Statistic rows go first (by filter, so any legacy
/// duplicates are swept too); appointments keep their rows with the
/// service reference cleared by the store.
pub async fn delete_service(db: &DatabaseConnection, service_id: i32) -> Result<(), ServiceError> {
    let found = service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    service_statistic::Entity::delete_many()
        .filter(service_statistic::Column::ServiceId.eq(service_id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    service::Entity::delete_by_id(service_id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(service_id, name = %found.name, "service deleted");
    Ok(())
}
