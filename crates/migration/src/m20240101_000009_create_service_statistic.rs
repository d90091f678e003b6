//! Create `service_statistic` counter table.
//!
//! One row per service; the unique key on `service_id` (index migration)
//! backs the atomic upsert-increment used for view counting.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceStatistic::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceStatistic::Id))
                    .col(integer(ServiceStatistic::ServiceId).not_null())
                    .col(integer(ServiceStatistic::ViewCount).not_null())
                    .col(integer(ServiceStatistic::AppointmentCount).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistic_service")
                            .from(ServiceStatistic::Table, ServiceStatistic::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceStatistic::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceStatistic { Table, Id, ServiceId, ViewCount, AppointmentCount }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }
