//! Per-service view/appointment counters.
//!
//! Counter maintenance goes through atomic upserts keyed on the unique
//! `service_id` column, so two concurrent first views of a service cannot
//! produce duplicate rows. `appointment_count` is only ever written by the
//! seeder; no booking path increments it (behavior inherited from the
//! system this replaces, kept for data compatibility).

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use models::service_statistic::{ActiveModel, Column, Entity, Model};

use crate::errors::ServiceError;

/// Register one detail view: insert the counter row if absent, otherwise
/// increment `view_count` by one, in a single statement.
pub async fn record_view(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<Model, ServiceError> {
    let am = ActiveModel {
        service_id: Set(service_id),
        view_count: Set(1),
        appointment_count: Set(0),
        ..Default::default()
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::ServiceId)
                .value(Column::ViewCount, Expr::col((Entity, Column::ViewCount)).add(1))
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Seed a zeroed counter row; a no-op when the row already exists.
pub async fn init_zeroed(db: &DatabaseConnection, service_id: i32) -> Result<(), ServiceError> {
    let am = ActiveModel {
        service_id: Set(service_id),
        view_count: Set(0),
        appointment_count: Set(0),
        ..Default::default()
    };
    match Entity::insert(am)
        .on_conflict(OnConflict::column(Column::ServiceId).do_nothing().to_owned())
        .exec(db)
        .await
    {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(ServiceError::Db(e.to_string())),
    }
}

pub async fn get_for_service(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<Option<Model>, ServiceError> {
    Entity::find()
        .filter(Column::ServiceId.eq(service_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
