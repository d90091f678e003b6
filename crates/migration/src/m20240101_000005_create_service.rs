//! Create `service` table with nullable FK to `category`.
//!
//! Deleting a category keeps its services with the reference cleared.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::ServiceId))
                    .col(integer_null(Service::CategoryId))
                    .col(string_len(Service::Name, 100).not_null())
                    .col(text_null(Service::Description))
                    .col(decimal_len(Service::StateDuty, 10, 2).not_null())
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_category")
                            .from(Service::Table, Service::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service { Table, ServiceId, CategoryId, Name, Description, StateDuty, CreatedAt }

#[derive(DeriveIden)]
enum Category { Table, CategoryId }
