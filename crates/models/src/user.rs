use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointment,
    FavoriteService,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::has_many(super::appointment::Entity).into(),
            Relation::FavoriteService => {
                Entity::has_many(super::favorite_service::Entity).into()
            }
        }
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

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub struct NewUser<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
}

pub async fn create(db: &DatabaseConnection, new: NewUser<'_>) -> Result<Model, ModelError> {
    validate_email(new.email)?;
    if new.username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        email: Set(new.email.to_string()),
        username: Set(new.username.to_string()),
        first_name: Set(new.first_name.to_string()),
        last_name: Set(new.last_name.to_string()),
        phone: Set(new.phone.map(|p| p.to_string())),
        is_active: Set(true),
        is_staff: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Lookup-or-create by email, the natural key used by the seeder.
pub async fn find_or_create(db: &DatabaseConnection, new: NewUser<'_>) -> Result<Model, ModelError> {
    if let Some(found) = Entity::find()
        .filter(Column::Email.eq(new.email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
    {
        return Ok(found);
    }
    create(db, new).await
}

/// Removes the user row; appointments and favorites cascade in the store.
pub async fn hard_delete(db: &DatabaseConnection, user_id: i32) -> Result<(), ModelError> {
    Entity::delete_by_id(user_id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn email_requires_at_sign() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }
}
