#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::errors::ServiceError;

// Run migrations only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect and migrate, or return `None` so the caller can skip the test
/// when no database is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    let migrated = MIGRATED
        .get_or_init(|| async {
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    migrated.then_some(db)
}

/// A fresh user with a unique email, for tests that need a booking actor.
pub async fn sample_user(db: &DatabaseConnection) -> Result<models::user::Model, ServiceError> {
    let email = format!("svc_{}@example.com", Uuid::new_v4());
    let created = models::user::create(
        db,
        models::user::NewUser {
            email: &email,
            username: "svcuser",
            first_name: "Тест",
            last_name: "Тестов",
            phone: None,
        },
    )
    .await?;
    Ok(created)
}
