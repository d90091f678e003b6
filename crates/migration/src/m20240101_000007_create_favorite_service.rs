//! Create `favorite_service` join table; the (user, service) pair is made
//! unique in the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteService::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteService::FavoriteServiceId))
                    .col(integer(FavoriteService::UserId).not_null())
                    .col(integer(FavoriteService::ServiceId).not_null())
                    .col(timestamp_with_time_zone(FavoriteService::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user")
                            .from(FavoriteService::Table, FavoriteService::UserId)
                            .to(AppUser::Table, AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_service")
                            .from(FavoriteService::Table, FavoriteService::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FavoriteService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FavoriteService { Table, FavoriteServiceId, UserId, ServiceId, CreatedAt }

#[derive(DeriveIden)]
enum AppUser { Table, UserId }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }
