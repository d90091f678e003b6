use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub branch_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub work_hours: String,
    pub photo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::has_many(super::appointment::Entity).into(),
        }
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct NewBranch<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub work_hours: &'a str,
}

/// Lookup-or-create by name, the natural key used by the seeder.
pub async fn find_or_create(db: &DatabaseConnection, new: NewBranch<'_>) -> Result<Model, ModelError> {
    if new.name.trim().is_empty() {
        return Err(ModelError::Validation("branch name required".into()));
    }
    if let Some(found) = Entity::find()
        .filter(Column::Name.eq(new.name))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
    {
        return Ok(found);
    }
    let am = ActiveModel {
        name: Set(new.name.to_string()),
        address: Set(new.address.to_string()),
        phone: Set(new.phone.map(|p| p.to_string())),
        work_hours: Set(new.work_hours.to_string()),
        photo: Set(None),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
