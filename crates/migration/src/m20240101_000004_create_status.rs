//! Create `status` table; appointment lifecycle labels are free-text rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(pk_auto(Status::StatusId))
                    .col(string_len(Status::Name, 50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Status::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Status { Table, StatusId, Name }
