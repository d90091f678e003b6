use crate::db::connect;
use crate::{appointment, branch, category, favorite_service, service, status, user};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Connect and migrate, or skip the test when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

async fn insert_service(db: &DatabaseConnection, name: &str) -> Result<service::Model> {
    let am = service::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(None),
        description: Set(None),
        state_duty: Set(Decimal::ZERO),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn sample_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

async fn insert_appointment(
    db: &DatabaseConnection,
    user_id: i32,
    service_id: Option<i32>,
) -> Result<appointment::Model> {
    let now = Utc::now().into();
    let am = appointment::ActiveModel {
        user_id: Set(user_id),
        service_id: Set(service_id),
        branch_id: Set(None),
        status_id: Set(None),
        desired_date: Set(sample_date()),
        desired_time: Set(sample_time()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_user(db: &DatabaseConnection) -> Result<user::Model> {
    let email = format!("model_{}@example.com", Uuid::new_v4());
    Ok(user::create(
        db,
        user::NewUser {
            email: &email,
            username: "modeltest",
            first_name: "Иван",
            last_name: "Петров",
            phone: None,
        },
    )
    .await?)
}

#[tokio::test]
async fn find_or_create_is_idempotent_per_name() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let name = format!("Категория {}", Uuid::new_v4());
    let first = category::find_or_create(&db, &name).await?;
    let second = category::find_or_create(&db, &name).await?;
    assert_eq!(first.category_id, second.category_id);

    let count = category::Entity::find()
        .filter(category::Column::Name.eq(name.clone()))
        .all(&db)
        .await?
        .len();
    assert_eq!(count, 1);

    category::Entity::delete_by_id(first.category_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn deleting_user_cascades_to_appointments_and_favorites() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = insert_user(&db).await?;
    let s = insert_service(&db, &format!("Услуга {}", Uuid::new_v4())).await?;
    let appt = insert_appointment(&db, u.user_id, Some(s.service_id)).await?;
    let fav = favorite_service::ActiveModel {
        user_id: Set(u.user_id),
        service_id: Set(s.service_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    user::hard_delete(&db, u.user_id).await?;

    assert!(appointment::Entity::find_by_id(appt.appointment_id).one(&db).await?.is_none());
    assert!(favorite_service::Entity::find_by_id(fav.favorite_service_id)
        .one(&db)
        .await?
        .is_none());

    service::Entity::delete_by_id(s.service_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn deleting_service_clears_appointment_reference() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = insert_user(&db).await?;
    let s = insert_service(&db, &format!("Услуга {}", Uuid::new_v4())).await?;
    let appt = insert_appointment(&db, u.user_id, Some(s.service_id)).await?;

    service::Entity::delete_by_id(s.service_id).exec(&db).await?;

    let kept = appointment::Entity::find_by_id(appt.appointment_id)
        .one(&db)
        .await?
        .expect("appointment must survive service deletion");
    assert_eq!(kept.service_id, None);

    user::hard_delete(&db, u.user_id).await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_pair_is_rejected_by_store() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = insert_user(&db).await?;
    let s = insert_service(&db, &format!("Услуга {}", Uuid::new_v4())).await?;

    let make = || favorite_service::ActiveModel {
        user_id: Set(u.user_id),
        service_id: Set(s.service_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    make().insert(&db).await?;
    assert!(make().insert(&db).await.is_err());

    user::hard_delete(&db, u.user_id).await?;
    service::Entity::delete_by_id(s.service_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn status_and_branch_lookup_or_create() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let name = format!("Статус {}", Uuid::new_v4());
    let st1 = status::find_or_create(&db, &name).await?;
    let st2 = status::find_or_create(&db, &name).await?;
    assert_eq!(st1.status_id, st2.status_id);

    let bname = format!("МФЦ {}", Uuid::new_v4());
    let b1 = branch::find_or_create(
        &db,
        branch::NewBranch {
            name: &bname,
            address: "ул. Ленина, 1",
            phone: Some("+79161234567"),
            work_hours: "09:00-18:00 (Пн-Пт)",
        },
    )
    .await?;
    let b2 = branch::find_or_create(
        &db,
        branch::NewBranch { name: &bname, address: "другой адрес", phone: None, work_hours: "-" },
    )
    .await?;
    assert_eq!(b1.branch_id, b2.branch_id);
    // defaults only apply on first creation
    assert_eq!(b2.address, "ул. Ленина, 1");

    status::Entity::delete_by_id(st1.status_id).exec(&db).await?;
    branch::Entity::delete_by_id(b1.branch_id).exec(&db).await?;
    Ok(())
}
