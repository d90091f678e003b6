//! User favorites. The (user, service) pair is unique in the store; adding
//! an existing pair is a no-op that returns the row already there.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use models::{favorite_service, service, user};

use crate::errors::ServiceError;

async fn find_pair(
    db: &DatabaseConnection,
    user_id: i32,
    service_id: i32,
) -> Result<Option<favorite_service::Model>, ServiceError> {
    favorite_service::Entity::find()
        .filter(favorite_service::Column::UserId.eq(user_id))
        .filter(favorite_service::Column::ServiceId.eq(service_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Add a service to a user's favorites. Returns the favorite row and
/// whether it was created by this call.
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    service_id: i32,
) -> Result<(favorite_service::Model, bool), ServiceError> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?;
    service::Entity::find_by_id(service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?;

    let am = favorite_service::ActiveModel {
        user_id: Set(user_id),
        service_id: Set(service_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let inserted = favorite_service::Entity::insert(am)
        .on_conflict(
            OnConflict::columns([
                favorite_service::Column::UserId,
                favorite_service::Column::ServiceId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(db)
        .await;
    let created = match inserted {
        Ok(_) => true,
        Err(DbErr::RecordNotInserted) => false,
        Err(e) => return Err(ServiceError::Db(e.to_string())),
    };
    let row = find_pair(db, user_id, service_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("favorite"))?;
    Ok((row, created))
}

pub async fn remove_favorite(
    db: &DatabaseConnection,
    favorite_service_id: i32,
) -> Result<(), ServiceError> {
    let res = favorite_service::Entity::delete_by_id(favorite_service_id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("favorite"));
    }
    Ok(())
}

pub async fn list_favorites(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<favorite_service::Model>, ServiceError> {
    favorite_service::Entity::find()
        .filter(favorite_service::Column::UserId.eq(user_id))
        .order_by(favorite_service::Column::CreatedAt, Order::Desc)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{self, ServiceInput};
    use crate::test_support::{get_db, sample_user};
    use anyhow::Result;
    use uuid::Uuid;

    #[tokio::test]
    async fn duplicate_add_is_a_no_op() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let user = sample_user(&db).await?;
        let s = services::create_service(
            &db,
            ServiceInput {
                name: format!("Избранная услуга {}", Uuid::new_v4()),
                category_id: None,
                description: None,
                state_duty: Default::default(),
            },
        )
        .await?;

        let (first, created_first) = add_favorite(&db, user.user_id, s.service_id).await?;
        let (second, created_second) = add_favorite(&db, user.user_id, s.service_id).await?;
        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.favorite_service_id, second.favorite_service_id);

        let pairs = favorite_service::Entity::find()
            .filter(favorite_service::Column::UserId.eq(user.user_id))
            .filter(favorite_service::Column::ServiceId.eq(s.service_id))
            .all(&db)
            .await?;
        assert_eq!(pairs.len(), 1);

        remove_favorite(&db, first.favorite_service_id).await?;
        services::delete_service(&db, s.service_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn removing_a_missing_favorite_is_not_found() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        assert!(matches!(
            remove_favorite(&db, i32::MAX).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }
}
