//! Populate the database with demo data. Safe to run repeatedly: every
//! named entity is looked up by its natural key before being created.

use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    service::seed::run(&db).await?;

    info!("database seeded");
    Ok(())
}
