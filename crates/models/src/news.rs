use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub news_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Lookup-or-create by title, the natural key used by the seeder.
pub async fn find_or_create(
    db: &DatabaseConnection,
    title: &str,
    content: &str,
) -> Result<Model, ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("news title required".into()));
    }
    if let Some(found) = Entity::find()
        .filter(Column::Title.eq(title))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
    {
        return Ok(found);
    }
    let am = ActiveModel {
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
