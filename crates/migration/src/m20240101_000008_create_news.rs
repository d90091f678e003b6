//! Create `news` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::NewsId))
                    .col(string_len(News::Title, 200).not_null())
                    .col(text(News::Content).not_null())
                    .col(timestamp_with_time_zone(News::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(News::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum News { Table, NewsId, Title, Content, CreatedAt }
