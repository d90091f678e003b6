use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-service counter pair. `view_count` is bumped on every detail view
/// through an atomic upsert keyed on the unique `service_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_statistic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_id: i32,
    pub view_count: i32,
    pub appointment_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(super::service::Entity)
                .from(Column::ServiceId)
                .to(super::service::Column::ServiceId)
                .into(),
        }
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
