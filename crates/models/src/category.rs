use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::has_many(super::service::Entity).into(),
        }
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Lookup-or-create by name, the natural key used by the seeder.
pub async fn find_or_create(db: &DatabaseConnection, name: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("category name required".into()));
    }
    if let Some(found) = Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
    {
        return Ok(found);
    }
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
