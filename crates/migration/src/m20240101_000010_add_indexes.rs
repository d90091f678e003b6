use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: index on category_id
        manager
            .create_index(
                Index::create()
                    .name("idx_service_category")
                    .table(Service::Table)
                    .col(Service::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Appointment: indexes on user_id, service_id and desired_date
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_user")
                    .table(Appointment::Table)
                    .col(Appointment::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_service")
                    .table(Appointment::Table)
                    .col(Appointment::ServiceId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_desired_date")
                    .table(Appointment::Table)
                    .col(Appointment::DesiredDate)
                    .to_owned(),
            )
            .await?;

        // FavoriteService: composite unique (user_id, service_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_favorite_user_service")
                    .table(FavoriteService::Table)
                    .col(FavoriteService::UserId)
                    .col(FavoriteService::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ServiceStatistic: unique service_id, required by upsert-increment
        manager
            .create_index(
                Index::create()
                    .name("uniq_statistic_service")
                    .table(ServiceStatistic::Table)
                    .col(ServiceStatistic::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_category").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_user").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_service").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointment_desired_date")
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_favorite_user_service")
                    .table(FavoriteService::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_statistic_service")
                    .table(ServiceStatistic::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, CategoryId }

#[derive(DeriveIden)]
enum Appointment { Table, UserId, ServiceId, DesiredDate }

#[derive(DeriveIden)]
enum FavoriteService { Table, UserId, ServiceId }

#[derive(DeriveIden)]
enum ServiceStatistic { Table, ServiceId }
