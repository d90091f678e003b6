//! Create `app_user` table.
//!
//! Email is the unique login identity; auth itself is handled outside the core.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::UserId))
                    .col(string_len(AppUser::Email, 255).unique_key().not_null())
                    .col(string_len(AppUser::Username, 150).not_null())
                    .col(string_len(AppUser::FirstName, 150).not_null())
                    .col(string_len(AppUser::LastName, 150).not_null())
                    .col(string_len_null(AppUser::Phone, 15))
                    .col(boolean(AppUser::IsActive).not_null())
                    .col(boolean(AppUser::IsStaff).not_null())
                    .col(timestamp_with_time_zone(AppUser::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AppUser::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppUser {
    Table,
    UserId,
    Email,
    Username,
    FirstName,
    LastName,
    Phone,
    IsActive,
    IsStaff,
    CreatedAt,
    UpdatedAt,
}
