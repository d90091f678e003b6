//! Migrator registering entity-specific migrations in dependency order.
//! Indexes and unique constraints are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_category;
mod m20240101_000002_create_user;
mod m20240101_000003_create_branch;
mod m20240101_000004_create_status;
mod m20240101_000005_create_service;
mod m20240101_000006_create_appointment;
mod m20240101_000007_create_favorite_service;
mod m20240101_000008_create_news;
mod m20240101_000009_create_service_statistic;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_category::Migration),
            Box::new(m20240101_000002_create_user::Migration),
            Box::new(m20240101_000003_create_branch::Migration),
            Box::new(m20240101_000004_create_status::Migration),
            Box::new(m20240101_000005_create_service::Migration),
            Box::new(m20240101_000006_create_appointment::Migration),
            Box::new(m20240101_000007_create_favorite_service::Migration),
            Box::new(m20240101_000008_create_news::Migration),
            Box::new(m20240101_000009_create_service_statistic::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
