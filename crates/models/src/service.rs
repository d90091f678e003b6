use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Services with a state duty above this amount are hidden from search.
pub const SEARCH_DUTY_LIMIT: i64 = 5000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub state_duty: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
    Appointment,
    FavoriteService,
    ServiceStatistic,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(super::category::Entity)
                .from(Column::CategoryId)
                .to(super::category::Column::CategoryId)
                .into(),
            Relation::Appointment => Entity::has_many(super::appointment::Entity).into(),
            Relation::FavoriteService => {
                Entity::has_many(super::favorite_service::Entity).into()
            }
            Relation::ServiceStatistic => {
                Entity::has_many(super::service_statistic::Entity).into()
            }
        }
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::favorite_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteService.def()
    }
}

impl Related<super::service_statistic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceStatistic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("service name required".into()));
    }
    if name.chars().count() > 100 {
        return Err(ModelError::Validation("service name too long (max 100)".into()));
    }
    Ok(())
}

pub fn validate_state_duty(duty: Decimal) -> Result<(), ModelError> {
    if duty.is_sign_negative() {
        return Err(ModelError::Validation("state duty must not be negative".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_present_and_bounded() {
        assert!(validate_name("Замена паспорта РФ").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn duty_must_be_non_negative() {
        assert!(validate_state_duty(Decimal::ZERO).is_ok());
        assert!(validate_state_duty(Decimal::new(30000, 2)).is_ok());
        assert!(validate_state_duty(Decimal::new(-1, 2)).is_err());
    }
}
