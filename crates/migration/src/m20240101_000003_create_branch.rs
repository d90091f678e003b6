//! Create `branch` table for MFC office locations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::BranchId))
                    .col(string_len(Branch::Name, 100).not_null())
                    .col(string_len(Branch::Address, 255).not_null())
                    .col(string_len_null(Branch::Phone, 15))
                    .col(string_len(Branch::WorkHours, 100).not_null())
                    // Reference into external photo storage, not a blob
                    .col(string_len_null(Branch::Photo, 255))
                    .col(timestamp_with_time_zone(Branch::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Branch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Branch { Table, BranchId, Name, Address, Phone, WorkHours, Photo, CreatedAt }
