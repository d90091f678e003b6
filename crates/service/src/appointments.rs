//! Appointment booking and the busy-day histogram.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::{appointment, user};

use crate::errors::ServiceError;

/// Trailing window the busy-day histogram looks at.
const BUSY_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentInput {
    pub user_id: i32,
    #[serde(default)]
    pub service_id: Option<i32>,
    #[serde(default)]
    pub branch_id: Option<i32>,
    #[serde(default)]
    pub status_id: Option<i32>,
    pub desired_date: NaiveDate,
    pub desired_time: NaiveTime,
}

/// Appointment density for one day of the week. `day` uses 0=Sunday
/// numbering, matching Postgres `EXTRACT(dow ...)` so downstream data
/// consumers see the same buckets as before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusyDay {
    pub day: u8,
    pub count: u64,
}

/// Book an appointment. Service, branch and status are optional at
/// creation; overlapping bookings for the same branch and slot are allowed.
pub async fn create_appointment(
    db: &DatabaseConnection,
    input: AppointmentInput,
) -> Result<appointment::Model, ServiceError> {
    user::Entity::find_by_id(input.user_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?;

    let now = Utc::now().into();
    let am = appointment::ActiveModel {
        user_id: Set(input.user_id),
        service_id: Set(input.service_id),
        branch_id: Set(input.branch_id),
        status_id: Set(input.status_id),
        desired_date: Set(input.desired_date),
        desired_time: Set(input.desired_time),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(
        appointment_id = created.appointment_id,
        user_id = created.user_id,
        "appointment created"
    );
    Ok(created)
}

/// Histogram of a service's appointments over the trailing 30 days,
/// bucketed by the weekday of `desired_date`. Empty buckets are omitted.
pub async fn busy_days(
    db: &DatabaseConnection,
    service_id: i32,
) -> Result<Vec<BusyDay>, ServiceError> {
    busy_days_since(
        db,
        service_id,
        Utc::now().date_naive() - chrono::Days::new(BUSY_WINDOW_DAYS),
    )
    .await
}

pub async fn busy_days_since(
    db: &DatabaseConnection,
    service_id: i32,
    since: NaiveDate,
) -> Result<Vec<BusyDay>, ServiceError> {
    let recent = appointment::Entity::find()
        .filter(appointment::Column::ServiceId.eq(service_id))
        .filter(appointment::Column::DesiredDate.gte(since))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(bucket_by_weekday(recent.iter().map(|a| a.desired_date)))
}

fn bucket_by_weekday(dates: impl Iterator<Item = NaiveDate>) -> Vec<BusyDay> {
    let mut counts = [0u64; 7];
    for date in dates {
        counts[date.weekday().num_days_from_sunday() as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(day, &count)| BusyDay { day: day as u8, count })
        .collect()
}
